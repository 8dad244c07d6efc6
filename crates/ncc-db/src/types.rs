//! Closed value sets stored as varchar columns.

#[derive(thiserror::Error, Debug)]
#[error("not a recognized {kind}: {value}")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

macro_rules! impl_closed_set {
    {
        Enum $enum_type:ty, Kind $kind:expr; $($variant:ident => $name:expr),+
    } => {
        impl $enum_type {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl std::str::FromStr for $enum_type {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant)),+,
                    other => Err(ParseError {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

/// NCC wing a cadet is enrolled under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wing {
    Air,
    Army,
    Navy,
}

/// Kind of work experience record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExperienceKind {
    Placement,
    Internship,
}

/// Application role consulted for authorization decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRole {
    Admin,
    Student,
}

impl_closed_set! {
    Enum Wing, Kind "NCC wing";
    Air => "air",
    Army => "army",
    Navy => "navy"
}

impl_closed_set! {
    Enum ExperienceKind, Kind "experience kind";
    Placement => "placement",
    Internship => "internship"
}

impl_closed_set! {
    Enum AppRole, Kind "application role";
    Admin => "admin",
    Student => "student"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sets_round_trip_through_their_column_form() {
        for wing in [Wing::Air, Wing::Army, Wing::Navy] {
            assert_eq!(wing.as_str().parse::<Wing>().unwrap(), wing);
        }
        for kind in [ExperienceKind::Placement, ExperienceKind::Internship] {
            assert_eq!(kind.as_str().parse::<ExperienceKind>().unwrap(), kind);
        }
        for role in [AppRole::Admin, AppRole::Student] {
            assert_eq!(role.as_str().parse::<AppRole>().unwrap(), role);
        }
    }

    #[test]
    fn values_outside_a_closed_set_are_rejected() {
        assert!("coast-guard".parse::<Wing>().is_err());
        assert!("volunteering".parse::<ExperienceKind>().is_err());
        assert!("superuser".parse::<AppRole>().is_err());
        assert!("Air".parse::<Wing>().is_err(), "column form is lower case");
    }
}
