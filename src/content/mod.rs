mod load;
mod locale;
mod models;
mod summary;

pub use load::{load_content, BuildResult, ContentBundle, Problem as LoadContentProblem};
pub use locale::{resolve_localized, Locale, LocaleParseError, Localized, DEFAULT_LOCALE};
pub use models::{
    Article, Calculator, ContentType, FieldDescriptor, FieldKind, LocalizedContent, Standard,
};
pub use summary::{ArticleSummary, CalculatorSummary, StandardSummary};
