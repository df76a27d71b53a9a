use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// SemanticType
///
/// What a field *means*, independent of how any store represents it.
/// Drives the default widget choice.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum SemanticType {
    Datetime,
    Identifier,
    Image,
    Note,
    Numeric,
    Reference,
    Text,
}

impl SemanticType {
    /// Canonical widget for this semantic type when the field does not
    /// override it.
    #[must_use]
    pub const fn default_widget(self) -> Widget {
        match self {
            Self::Datetime => Widget::Calendar,
            Self::Identifier => Widget::Badge,
            Self::Image => Widget::Thumbnail,
            Self::Note => Widget::Multiline,
            Self::Numeric => Widget::Stepper,
            Self::Reference => Widget::Picker,
            Self::Text => Widget::Line,
        }
    }

    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(self, Self::Reference)
    }
}

///
/// Widget
///
/// Display widget vocabulary understood by the host rendering layer.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum Widget {
    Badge,
    Calendar,
    Line,
    Multiline,
    Picker,
    Stepper,
    Thumbnail,
}

///
/// ViewMode
///
/// Presentation mode a view descriptor targets.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    List,
    Form,
}

///
/// TESTS
///
