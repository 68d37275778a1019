//! Canned payloads served in demo mode (no completion credential
//! configured). Shape-for-shape with live data so the presentation
//! layer cannot tell the difference.

use crate::core::types::{
    CompetitorAnalysis, CompetitorCandidate, Insights, Messaging, Pricing, PricingPlan,
    SiteProfile,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn plan(name: &str, price: &str, features: &[&str]) -> PricingPlan {
    PricingPlan {
        name: name.to_string(),
        price: price.to_string(),
        billing_frequency: "monthly".to_string(),
        features: strings(features),
    }
}

pub fn sample_site_profile() -> SiteProfile {
    SiteProfile {
        url: "https://example.com".to_string(),
        industry: "Business Analytics & Intelligence".to_string(),
        business_model: "SaaS (Software as a Service)".to_string(),
        products: strings(&["Analytics Platform", "Data Visualization", "Reporting Tools"]),
        target_market: "Small to medium-sized businesses".to_string(),
        performance: None,
    }
}

pub fn sample_competitors() -> Vec<CompetitorCandidate> {
    vec![
        CompetitorCandidate {
            name: "Example Competitor A".to_string(),
            url: "https://example-a.com".to_string(),
            icon: "https://www.google.com/s2/favicons?domain=example-a.com&sz=64".to_string(),
            reason: "Direct competitor in the SMB analytics space with similar pricing and feature set"
                .to_string(),
            similarity_score: 92,
        },
        CompetitorCandidate {
            name: "Example Competitor B".to_string(),
            url: "https://example-b.com".to_string(),
            icon: "https://www.google.com/s2/favicons?domain=example-b.com&sz=64".to_string(),
            reason: "Enterprise-focused analytics platform targeting similar use cases with more advanced features"
                .to_string(),
            similarity_score: 85,
        },
        CompetitorCandidate {
            name: "Example Competitor C".to_string(),
            url: "https://example-c.com".to_string(),
            icon: "https://www.google.com/s2/favicons?domain=example-c.com&sz=64".to_string(),
            reason: "Real-time analytics competitor with freemium model and marketing-specific features"
                .to_string(),
            similarity_score: 78,
        },
    ]
}

pub fn sample_competitor_analyses() -> Vec<CompetitorAnalysis> {
    vec![
        CompetitorAnalysis {
            competitor_name: "Example Competitor A".to_string(),
            url: "https://example-a.com".to_string(),
            pricing: Pricing {
                plans: vec![
                    plan(
                        "Starter",
                        "$29/mo",
                        &["10 users", "Basic support", "5GB storage", "Email integration"],
                    ),
                    plan(
                        "Professional",
                        "$79/mo",
                        &[
                            "50 users",
                            "Priority support",
                            "50GB storage",
                            "Advanced analytics",
                            "API access",
                        ],
                    ),
                    plan(
                        "Enterprise",
                        "$199/mo",
                        &[
                            "Unlimited users",
                            "24/7 support",
                            "Unlimited storage",
                            "Custom integrations",
                            "Dedicated account manager",
                        ],
                    ),
                ],
            },
            products: strings(&["Product Analytics", "Dashboard Builder", "Report Generator"]),
            messaging: Messaging {
                headline: "Analytics Made Simple".to_string(),
                value_proposition: "Get insights without complexity".to_string(),
                target_audience: "Small businesses and startups".to_string(),
                differentiators: strings(&[
                    "Easy setup",
                    "Affordable pricing",
                    "Beautiful dashboards",
                ]),
            },
            insights: Insights {
                strengths: strings(&[
                    "User-friendly interface",
                    "Competitive pricing",
                    "Fast onboarding",
                ]),
                positioning: "Budget-friendly analytics for small teams".to_string(),
                strategy: "Focus on simplicity and affordability to attract SMBs".to_string(),
            },
            performance: None,
        },
        CompetitorAnalysis {
            competitor_name: "Example Competitor B".to_string(),
            url: "https://example-b.com".to_string(),
            pricing: Pricing {
                plans: vec![
                    plan(
                        "Basic",
                        "$49/mo",
                        &["25 users", "Standard support", "20GB storage", "Basic reports"],
                    ),
                    plan(
                        "Growth",
                        "$129/mo",
                        &[
                            "100 users",
                            "Priority support",
                            "100GB storage",
                            "Advanced reports",
                            "Custom branding",
                        ],
                    ),
                    plan(
                        "Scale",
                        "$299/mo",
                        &[
                            "Unlimited users",
                            "White-glove support",
                            "Unlimited storage",
                            "AI-powered insights",
                            "Enterprise SLA",
                        ],
                    ),
                ],
            },
            products: strings(&[
                "Business Intelligence",
                "Data Warehouse",
                "Predictive Analytics",
                "ML Models",
            ]),
            messaging: Messaging {
                headline: "Enterprise-Grade Intelligence".to_string(),
                value_proposition: "Scale your data operations with confidence".to_string(),
                target_audience: "Mid-market and enterprise companies".to_string(),
                differentiators: strings(&[
                    "Enterprise security",
                    "Advanced AI",
                    "Scalable infrastructure",
                ]),
            },
            insights: Insights {
                strengths: strings(&[
                    "Robust feature set",
                    "Enterprise credibility",
                    "Advanced capabilities",
                ]),
                positioning: "Premium solution for growing companies".to_string(),
                strategy: "Target mid-market with enterprise features at accessible price points"
                    .to_string(),
            },
            performance: None,
        },
        CompetitorAnalysis {
            competitor_name: "Example Competitor C".to_string(),
            url: "https://example-c.com".to_string(),
            pricing: Pricing {
                plans: vec![
                    plan(
                        "Free",
                        "$0/mo",
                        &["5 users", "Community support", "1GB storage", "Basic dashboards"],
                    ),
                    plan(
                        "Pro",
                        "$99/mo",
                        &[
                            "50 users",
                            "Email support",
                            "25GB storage",
                            "Custom dashboards",
                            "Export data",
                        ],
                    ),
                    plan(
                        "Business",
                        "$249/mo",
                        &[
                            "200 users",
                            "Phone support",
                            "200GB storage",
                            "White labeling",
                            "Advanced permissions",
                            "SSO",
                        ],
                    ),
                ],
            },
            products: strings(&[
                "Real-time Analytics",
                "Customer Insights",
                "Marketing Attribution",
                "A/B Testing",
            ]),
            messaging: Messaging {
                headline: "Real-Time Insights for Modern Teams".to_string(),
                value_proposition: "Make data-driven decisions in real-time".to_string(),
                target_audience: "Digital-first companies and marketing teams".to_string(),
                differentiators: strings(&["Real-time data", "Marketing focus", "Freemium model"]),
            },
            insights: Insights {
                strengths: strings(&[
                    "Real-time capabilities",
                    "Marketing-specific features",
                    "Free tier for acquisition",
                ]),
                positioning: "Modern analytics for digital marketing teams".to_string(),
                strategy: "Freemium model to drive adoption, upsell on advanced features"
                    .to_string(),
            },
            performance: None,
        },
    ]
}
