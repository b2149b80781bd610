//! Static copy for every section of the page, in display order.

pub struct Metric {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const METRICS: &[Metric] = &[
    Metric {
        icon: "📈",
        value: "$10M+",
        label: "Revenue Generated",
        description: "Through strategic partnerships & market expansion",
    },
    Metric {
        icon: "🎯",
        value: "35%",
        label: "Average Growth Rate",
        description: "Consistent year-over-year improvement",
    },
    Metric {
        icon: "💡",
        value: "50+",
        label: "Strategic Partnerships",
        description: "Built through innovative RevOps approach",
    },
];

pub struct ProcessStep {
    pub step: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "1",
        icon: "🎯",
        title: "Opportunity Analysis",
        description: "Deep market research and data-driven opportunity identification",
    },
    ProcessStep {
        step: "2",
        icon: "🔀",
        title: "Strategy Development",
        description: "Custom RevOps framework implementation and goal setting",
    },
    ProcessStep {
        step: "3",
        icon: "🤝",
        title: "Partnership Building",
        description: "Strategic relationship development and ecosystem creation",
    },
    ProcessStep {
        step: "4",
        icon: "📈",
        title: "Growth Execution",
        description: "Systematic implementation with continuous optimization",
    },
];

pub struct ImpactStory {
    pub title: &'static str,
    pub impact: &'static str,
    pub timeline: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
}

pub const IMPACT_STORIES: &[ImpactStory] = &[
    ImpactStory {
        title: "Global Market Expansion",
        impact: "$5M+ Revenue Growth",
        timeline: "12 months",
        challenge: "Limited market presence in APAC region",
        solution: "Implemented RevOps framework for market entry",
        results: &[
            "40% Year-over-Year growth",
            "15 new strategic partnerships",
            "3 new market territories",
        ],
    },
    ImpactStory {
        title: "Digital Transformation",
        impact: "35% Efficiency Increase",
        timeline: "9 months",
        challenge: "Fragmented sales and operations processes",
        solution: "Custom RevOps digital transformation strategy",
        results: &[
            "50% reduction in sales cycle",
            "90% customer satisfaction",
            "2x team productivity",
        ],
    },
    ImpactStory {
        title: "Partnership Ecosystem",
        impact: "20+ Enterprise Deals",
        timeline: "18 months",
        challenge: "Limited enterprise market access",
        solution: "Strategic partnership program development",
        results: &[
            "$3M+ in partnership revenue",
            "5 Fortune 500 clients",
            "3 industry awards",
        ],
    },
];

pub struct Article {
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
}

pub const ARTICLES: &[Article] = &[
    Article {
        title: "RevOps: The Future of Business Growth",
        category: "Strategy",
        date: "June 2023",
        read_time: "8 min read",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=1000",
        summary: "How Revenue Operations is transforming business growth strategies in 2023",
    },
    Article {
        title: "Building Sustainable Partnership Ecosystems",
        category: "Partnerships",
        date: "May 2023",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&q=80&w=1000",
        summary: "A strategic approach to developing lasting business partnerships",
    },
    Article {
        title: "Jugaad Innovation in Modern Business",
        category: "Innovation",
        date: "April 2023",
        read_time: "10 min read",
        image: "https://images.unsplash.com/photo-1553484771-371a605b060b?auto=format&fit=crop&q=80&w=1000",
        summary: "Applying creative problem-solving in today's business landscape",
    },
];

pub const EXPERTISE: &[&str] = &[
    "Revenue Operations Strategy",
    "Partnership Development",
    "Market Expansion",
    "Digital Transformation",
    "Growth Strategy",
    "Business Development",
];

pub struct Certification {
    pub name: &'static str,
    pub org: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "RevOps Certification",
        org: "RevOps Institute",
        year: "2023",
    },
    Certification {
        name: "Strategic Partnership Management",
        org: "Business Growth Academy",
        year: "2022",
    },
    Certification {
        name: "Digital Business Transformation",
        org: "Digital Strategy Institute",
        year: "2021",
    },
];
