//! Fixed option lists of the application forms
//!
//! Each option serializes to the spelling the loan service expects and
//! parses case-insensitively from that spelling or one of its aliases.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option '{0}'")]
pub struct UnknownChoice(pub String);

macro_rules! choice_list {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal $( | $alias:literal )* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($label) $( || s.eq_ignore_ascii_case($alias) )* {
                        return Ok(Self::$variant);
                    }
                )+
                Err(UnknownChoice(s.to_string()))
            }
        }
    };
}

choice_list! {
    Gender {
        Male => "Male" | "M",
        Female => "Female" | "F",
    }
}

choice_list! {
    /// Employment situation of the applicant
    EmploymentType {
        Employed => "Employed" | "Salaried",
        SelfEmployed => "Self-Employed" | "Self Employed" | "SelfEmployed",
        Unemployed => "Unemployed",
    }
}

choice_list! {
    Dependents {
        Zero => "0",
        One => "1",
        Two => "2",
        ThreePlus => "3+",
    }
}

choice_list! {
    PropertyArea {
        Urban => "Urban",
        Semiurban => "Semiurban" | "Semi-urban",
        Rural => "Rural",
    }
}

choice_list! {
    Married {
        Yes => "Yes" | "Y",
        No => "No" | "N",
    }
}

choice_list! {
    Education {
        Graduate => "Graduate",
        NotGraduate => "Not Graduate",
    }
}
