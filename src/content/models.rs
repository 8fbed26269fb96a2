use super::Locale;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Calculator,
    Article,
    Standard,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::Calculator,
        ContentType::Article,
        ContentType::Standard,
    ];

    /// Name of the content sub-directory holding this type's files.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContentType::Calculator => "calculators",
            ContentType::Article => "articles",
            ContentType::Standard => "standards",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContentType::Calculator => "calculator",
            ContentType::Article => "article",
            ContentType::Standard => "standard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Number,
    Integer,
    Percent,
    Text,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    pub id: String,
    pub slug: String,
    pub category: String,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub inputs: Vec<FieldDescriptor>,
    #[serde(default)]
    pub outputs: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub related_calculators: Vec<String>,
    #[serde(default)]
    pub related_standards: Vec<String>,
    #[serde(default)]
    pub published: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standard {
    pub id: String,
    pub slug: String,
    pub country: String,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub related_calculators: Vec<String>,
}

/// Common read access over the three content records.
pub trait LocalizedContent: Clone + Send + Sync {
    const CONTENT_TYPE: ContentType;

    fn id(&self) -> &str;
    fn slug(&self) -> &str;
    fn locale(&self) -> Locale;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
}

macro_rules! impl_localized_content {
    ($ty:ty, $content_type:expr) => {
        impl LocalizedContent for $ty {
            const CONTENT_TYPE: ContentType = $content_type;

            fn id(&self) -> &str {
                &self.id
            }

            fn slug(&self) -> &str {
                &self.slug
            }

            fn locale(&self) -> Locale {
                self.locale
            }

            fn title(&self) -> &str {
                &self.title
            }

            fn description(&self) -> &str {
                &self.description
            }
        }
    };
}

impl_localized_content!(Calculator, ContentType::Calculator);
impl_localized_content!(Article, ContentType::Article);
impl_localized_content!(Standard, ContentType::Standard);
