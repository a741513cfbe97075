//! Action kinds of the admin data-provider contract.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Operation requested by the admin framework.
///
/// The wire constants (`GET_LIST`, `GET_ONE`, ...) are fixed by the admin side
/// of the contract; [`FromStr`] accepts exactly those and nothing else, so the
/// only runtime "unknown action" check lives at the parsing edge. Everything
/// downstream matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Paged, sorted, filtered listing of a resource.
    GetList,
    /// Single record by identifier.
    GetOne,
    /// Batch of records by identifier set.
    GetMany,
    /// Records referencing another record; queried like a listing.
    GetManyReference,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Wire constant for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::GetList => "GET_LIST",
            Action::GetOne => "GET_ONE",
            Action::GetMany => "GET_MANY",
            Action::GetManyReference => "GET_MANY_REFERENCE",
            Action::Create => "CREATE",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET_LIST" => Ok(Action::GetList),
            "GET_ONE" => Ok(Action::GetOne),
            "GET_MANY" => Ok(Action::GetMany),
            "GET_MANY_REFERENCE" => Ok(Action::GetManyReference),
            "CREATE" => Ok(Action::Create),
            "UPDATE" => Ok(Action::Update),
            "DELETE" => Ok(Action::Delete),
            other => Err(Error::UnsupportedAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_constants_round_trip() {
        let all = [
            Action::GetList,
            Action::GetOne,
            Action::GetMany,
            Action::GetManyReference,
            Action::Create,
            Action::Update,
            Action::Delete,
        ];
        for action in all {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn unknown_string_is_named_in_the_error() {
        let err = "WRONG_TYPE".parse::<Action>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedAction(ref s) if s == "WRONG_TYPE"));
        assert_eq!(err.to_string(), "unsupported action type WRONG_TYPE");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("get_list".parse::<Action>().is_err());
    }
}
