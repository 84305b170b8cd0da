use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z0-9+#.]+\b").unwrap());

/// Known skill and technology names, grouped loosely by domain.
pub const SKILL_CATALOG: &[&str] = &[
    // AI & machine learning
    "Machine Learning", "Deep Learning", "Natural Language Processing", "NLP",
    "Computer Vision", "Reinforcement Learning", "TensorFlow", "PyTorch", "Keras",
    "Scikit-learn", "OpenCV", "Hugging Face Transformers", "LLaMA Models", "Generative AI",
    "LangChain", "AutoML", "ONNX", "Speech Recognition", "Chatbots", "Prompt Engineering",
    // Data science & data engineering
    "Python", "R", "SQL", "Pandas", "NumPy", "Matplotlib", "Seaborn", "Scipy",
    "Data Visualization", "Big Data", "Apache Spark", "Hadoop", "Airflow",
    "Snowflake", "Databricks", "Power BI", "Tableau", "Data Warehousing",
    "ETL Pipelines", "Feature Engineering", "Statistical Analysis", "Bayesian Inference",
    "Time Series Analysis",
    // Web frontend
    "HTML", "CSS", "JavaScript", "React.js", "Next.js", "Vue.js", "Angular", "Svelte",
    "TypeScript", "Bootstrap", "Tailwind CSS", "jQuery",
    // Web backend
    "Node.js", "Express.js", "Django", "Flask", "FastAPI", "Ruby on Rails",
    "Laravel", "Spring Boot", ".NET Core",
    // Databases & APIs
    "MySQL", "PostgreSQL", "MongoDB", "Firebase", "REST APIs", "GraphQL", "WebSockets",
    // DevOps & cloud
    "Docker", "Kubernetes", "AWS", "Azure", "GCP", "CI/CD", "Jenkins",
    "GitHub Actions", "Terraform",
    // Mobile (native)
    "Java", "Kotlin", "Swift", "Objective-C",
    // Mobile (cross-platform)
    "Flutter", "Dart", "React Native", "Xamarin", "Ionic", "Unity",
    // Salesforce
    "Salesforce", "Salesforce Lightning", "Apex Programming", "Visualforce",
    "Salesforce Flow", "Salesforce API Integration", "SOQL", "SOSL",
    "Einstein AI", "Marketing Cloud", "Service Cloud", "Sales Cloud",
    // Misc
    "Git", "GitHub", "Agile", "Scrum", "JIRA", "Linux", "Shell Scripting", "Cybersecurity",
];

/// Catalog entries present in the text as whole tokens, in catalog order.
///
/// Tokens are lowercased word-ish runs (letters, digits, `+`, `#`, `.`), so
/// multi-word catalog entries can never match; they are kept in the catalog
/// for callers that do their own phrase matching.
pub fn extract(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let tokens: HashSet<&str> = TOKEN_RE.find_iter(&lower).map(|m| m.as_str()).collect();

    SKILL_CATALOG
        .iter()
        .filter(|skill| tokens.contains(skill.to_lowercase().as_str()))
        .map(|skill| skill.to_string())
        .collect()
}
