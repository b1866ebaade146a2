use super::de;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One renderable block of a page.
///
/// The `type` discriminant and the `content` payload travel together in
/// [`SectionBody`], so a section can never carry content of the wrong
/// shape for its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub order: f64,
    /// Free-form per-section extension bag.
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(flatten)]
    pub body: SectionBody,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "camelCase")]
pub enum SectionBody {
    Hero(HeroContent),
    CardGrid(CardGridContent),
    About(AboutContent),
    Contact(ContactContent),
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Hero(_) => SectionKind::Hero,
            SectionBody::CardGrid(_) => SectionKind::CardGrid,
            SectionBody::About(_) => SectionKind::About,
            SectionBody::Contact(_) => SectionKind::Contact,
        }
    }
}

/// The section kinds a normalized configuration can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    CardGrid,
    About,
    Contact,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::CardGrid => "cardGrid",
            SectionKind::About => "about",
            SectionKind::Contact => "contact",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// ====================
// Shared leaves
// ====================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageContent {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    /// `primary`, `secondary`, `gradient`, `glass` or `outline`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ====================
// Hero
// ====================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub badge: HeroBadge,
    pub heading: HeroHeading,
    pub subheading: HeroSubheading,
    pub cta: HeroCtas,
    pub features: Vec<HeroFeature>,
    pub background_image: ImageContent,
    pub scroll_indicator: ScrollIndicator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroBadge {
    pub text: String,
    pub icon: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroHeading {
    pub text: String,
    pub gradient: bool,
    /// Number of leading words rendered without the gradient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_at: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSubheading {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroCtas {
    pub primary: CtaButton,
    pub secondary: CtaButton,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroFeature {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollIndicator {
    pub visible: bool,
    pub text: String,
}

// ====================
// Card grid
// ====================

/// Generic grid of cards: products, services, team members, posts...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardGridContent {
    pub badge: String,
    pub heading: String,
    pub description: String,
    pub items: Vec<CardItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<CardGridFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<CardGridLabels>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardItem {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    pub media: ImageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaButton>,
    pub tags: Vec<String>,
    pub featured: bool,
    /// Arbitrary display values; the first non-null one is shown.
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardGridFooter {
    pub text: String,
    pub cta: CtaButton,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardGridLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_label: Option<String>,
}

// ====================
// About
// ====================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub badge: String,
    pub heading: String,
    pub description: String,
    pub mission: Mission,
    pub stats: Vec<StatItem>,
    pub image: ImageContent,
    pub experience: Experience,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mission {
    pub heading: String,
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatItem {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub icon: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "de::string_or_number")]
    pub years: String,
    pub label: String,
}

// ====================
// Contact
// ====================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactContent {
    pub badge: String,
    pub heading: String,
    pub description: String,
    pub contact_info: Vec<ContactInfoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<ContactCta>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactInfoKind {
    Email,
    Phone,
    Address,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfoItem {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContactInfoKind,
    pub icon: String,
    pub label: String,
    pub value: String,
    pub href: Option<String>,
    pub color: GradientPair,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientPair {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactCta {
    pub heading: String,
    pub description: String,
    pub button: CtaButton,
}
