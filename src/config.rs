//! Site identity. Everything else on the page comes from `content`.

pub const OWNER_NAME: &str = "Chinedu Uzodinma";
pub const OWNER_TITLE: &str = "Revenue Operations & Business Growth Strategy";
pub const CONTACT_EMAIL: &str = "chinedu@example.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/chinedu-uzodinma";
pub const TWITTER_URL: &str = "https://x.com/chinedu_uzo";
