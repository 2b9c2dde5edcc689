//! # Tag Vocabularies
//!
//! Typed tags for moments, relations, forces and transition mechanisms.
//!
//! Each vocabulary lists the tags the corpus is known to use and keeps an
//! `Other` variant for anything not yet categorized, so content round-trips
//! unchanged while code can still match exhaustively. All tags serialize as
//! plain strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! open_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Tag outside the known vocabulary, preserved verbatim.
            Other(String),
        }

        impl $name {
            /// Every recognized tag, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($text),+];

            /// The tag as written in content.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(tag) => tag.as_str(),
                }
            }

            /// Whether the tag belongs to the known vocabulary.
            #[must_use]
            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                match tag {
                    $($text => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                Self::from(tag.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

open_vocabulary! {
    /// Classification of a moment inside a state.
    MomentType {
        Polarity => "polarity",
        Determination => "determination",
        Quality => "quality",
        Negation => "negation",
        Sublation => "sublation",
        Mediation => "mediation",
        Moment => "moment",
        Process => "process",
        Externality => "externality",
        Reflection => "reflection",
        Passover => "passover",
        Contradiction => "contradiction",
        Immanence => "immanence",
        Appearance => "appearance",
    }
}

open_vocabulary! {
    /// Directed relation from one moment to another.
    MomentRelation {
        Opposite => "opposite",
        Mediates => "mediates",
        Contains => "contains",
        Transforms => "transforms",
        Negates => "negates",
        PassesOver => "passesOver",
        Unified => "unified",
        Transitions => "transitions",
    }
}

open_vocabulary! {
    /// Kind of driver a force represents.
    ForceType {
        Contradiction => "contradiction",
        Negation => "negation",
        Externality => "externality",
        Sublation => "sublation",
        Mediation => "mediation",
        Immanence => "immanence",
        Reflection => "reflection",
        Passover => "passover",
        Appearance => "appearance",
    }
}

open_vocabulary! {
    /// How a transition carries one state into the next.
    Mechanism {
        Negation => "negation",
        Sublation => "sublation",
        Mediation => "mediation",
        Passover => "passover",
        Reflection => "reflection",
        Contradiction => "contradiction",
        Appearance => "appearance",
    }
}

impl MomentType {
    /// Polarity and negation moments are the poles of a spectrum.
    #[must_use]
    pub fn is_spectral(&self) -> bool {
        match self {
            Self::Polarity | Self::Negation => true,
            Self::Determination
            | Self::Quality
            | Self::Sublation
            | Self::Mediation
            | Self::Moment
            | Self::Process
            | Self::Externality
            | Self::Reflection
            | Self::Passover
            | Self::Contradiction
            | Self::Immanence
            | Self::Appearance
            | Self::Other(_) => false,
        }
    }
}

impl MomentRelation {
    /// Whether the relation marks the two moments as opposed poles.
    #[must_use]
    pub fn is_opposition(&self) -> bool {
        matches!(self, Self::Opposite)
    }
}

impl ForceType {
    /// Externality, reflection and passover forces determine how a state appears.
    #[must_use]
    pub fn is_appearing(&self) -> bool {
        match self {
            Self::Externality | Self::Reflection | Self::Passover => true,
            Self::Contradiction
            | Self::Negation
            | Self::Sublation
            | Self::Mediation
            | Self::Immanence
            | Self::Appearance
            | Self::Other(_) => false,
        }
    }
}

/// Coarse classification of a state. Closed: unknown phases are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Quality,
    Quantity,
    Reflection,
    Appearance,
    Subject,
    Object,
}

impl Phase {
    /// The phase as written in content.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Quantity => "quantity",
            Self::Reflection => "reflection",
            Self::Appearance => "appearance",
            Self::Subject => "subject",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
