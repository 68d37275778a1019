//! Prompt construction for the three pipeline steps. Each prompt pins
//! the exact JSON shape the Normalizer will parse; drift between a
//! prompt's shape block and the serde types is the main failure mode
//! to guard against when editing these.

use crate::core::types::PageContent;

/// Substituted for page content when extraction came back empty.
pub const FETCH_FAILED_NOTE: &str =
    "The page content could not be fetched. Rely on general knowledge about this website.";

fn page_block(page: Option<&PageContent>) -> String {
    match page {
        Some(page) => {
            let mut block = String::new();
            block.push_str("Extracted page content:\n");
            block.push_str(&format!("Title: {}\n", page.title));
            block.push_str(&format!("Meta description: {}\n", page.description));
            block.push_str(&format!("Headings: {}\n", page.h1s.join("; ")));
            block.push_str(&format!("Page text: {}", page.text));
            block
        }
        None => FETCH_FAILED_NOTE.to_string(),
    }
}

/// Prompt for classifying the user's own site into a profile.
pub fn classification_prompt(url: &str, page: Option<&PageContent>) -> String {
    format!(
        r#"Analyze this website: {url}

{content}

Identify and extract:
1. The specific industry niche they operate in (avoid generic labels like "Technology")
2. Business model (e.g., SaaS, E-commerce, Marketplace, etc.)
3. Main products or services they offer (list up to 3)
4. Target market/audience

Base your answer on the actual page content above; ignore brand-name cues that contradict it.

Return ONLY valid JSON with this exact structure:
{{
  "industry": "Industry name",
  "businessModel": "Business model type",
  "products": ["Product 1", "Product 2", "Product 3"],
  "targetMarket": "Description of target market"
}}

Be concise and accurate. Do not include any explanatory text outside the JSON."#,
        url = url,
        content = page_block(page),
    )
}

/// Prompt for suggesting the top direct competitors of a profiled site.
pub fn suggestion_prompt(user_site: &str, industry: &str, business_model: &str) -> String {
    format!(
        r#"Find the top 3 main competitors for this website: {user_site}

Context:
- Industry: {industry}
- Business Model: {business_model}

Find the most relevant direct competitors. Exclude large generalized platforms unless one of their specific competing products is the comparison subject; prefer niche and mid-market peers. For each competitor, provide:
1. Company name
2. Website URL
3. A brief reason why they are a competitor (1-2 sentences)
4. Similarity score (0-100, where 100 is most similar)

Return ONLY valid JSON with this exact structure:
{{
  "competitors": [
    {{
      "name": "Company Name",
      "url": "https://example.com",
      "reason": "Brief explanation of why they are a competitor",
      "similarity": 85
    }}
  ]
}}

Focus on direct competitors with similar products/services and target markets. Do not include any explanatory text outside the JSON."#,
    )
}

/// Per-competitor deep-analysis prompt.
pub fn analysis_prompt(url: &str, page: Option<&PageContent>) -> String {
    format!(
        r#"Analyze this competitor website: {url}

{content}

Extract and analyze:
- All pricing tiers (name, price, billing frequency, key features list)
- All products/services offered
- Main headline and value proposition from the homepage
- Target audience description
- Key differentiators that make them unique
- Strengths, market positioning, and overall strategic approach

Base your answer on the actual page content above; ignore brand-name cues that contradict it.

Return ONLY valid JSON with this exact structure:
{{
  "competitorName": "Company Name",
  "pricing": {{
    "plans": [
      {{
        "name": "Plan name",
        "price": "$X/mo",
        "billingFrequency": "monthly",
        "features": ["feature1", "feature2", "feature3"]
      }}
    ]
  }},
  "products": ["Product 1", "Product 2"],
  "messaging": {{
    "headline": "Main headline from homepage",
    "valueProposition": "Core value proposition",
    "targetAudience": "Who they target",
    "differentiators": ["Key differentiator 1", "Key differentiator 2"]
  }},
  "insights": {{
    "strengths": ["Strength 1", "Strength 2"],
    "positioning": "How they position themselves in the market",
    "strategy": "Overall strategic approach"
  }}
}}

Be thorough and extract all pricing plans completely. Do not include any explanatory text outside the JSON."#,
        url = url,
        content = page_block(page),
    )
}
