//! Command operation registry.
//!
//! The table order is a wire contract: a command's `operation` field carries
//! the index into this table.

use std::fmt;

use serde_json::Number;

/// Operation codes understood by `CommandMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Operation {
    Subscribe = 0,
    Unsubscribe = 1,
    Poll = 2,
    Pending = 3,
    /// Data client synchronisation.
    ClientSync = 4,
    /// Connectivity check over the current channel.
    Ping = 5,
    Generic = 6,
    ClusterRequest = 7,
    Login = 8,
    Logout = 9,
    SubscriptionInvalidate = 10,
    MultiSubscribe = 11,
    Disconnect = 12,
}

impl Operation {
    /// Default code of a freshly built command. Not part of the table.
    pub const UNKNOWN: i32 = 10000;

    /// Every registered operation, ordered by code.
    pub const ALL: [Operation; 13] = [
        Operation::Subscribe,
        Operation::Unsubscribe,
        Operation::Poll,
        Operation::Pending,
        Operation::ClientSync,
        Operation::Ping,
        Operation::Generic,
        Operation::ClusterRequest,
        Operation::Login,
        Operation::Logout,
        Operation::SubscriptionInvalidate,
        Operation::MultiSubscribe,
        Operation::Disconnect,
    ];

    /// Integer tag carried on the wire.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Resolve a wire code. `None` when the code is outside the table.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Resolve a decoded wire number. Codecs that carry every number as a
    /// double send `5.0` for ping, so whole-valued floats resolve too.
    pub fn from_number(code: &Number) -> Option<Self> {
        code.as_i64()
            .or_else(|| {
                code.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < Self::ALL.len() as f64)
                    .map(|f| f as i64)
            })
            .and_then(Self::from_code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Subscribe => "subscribe",
            Operation::Unsubscribe => "unsubscribe",
            Operation::Poll => "poll",
            Operation::Pending => "pending",
            Operation::ClientSync => "client_sync",
            Operation::Ping => "ping",
            Operation::Generic => "generic",
            Operation::ClusterRequest => "cluster_request",
            Operation::Login => "login",
            Operation::Logout => "logout",
            Operation::SubscriptionInvalidate => "subscription_invalidate",
            Operation::MultiSubscribe => "multi_subscribe",
            Operation::Disconnect => "disconnect",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.name(), self.code())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn codes_match_table_positions() {
        for (idx, op) in Operation::ALL.iter().enumerate() {
            assert_eq!(op.code() as usize, idx);
            assert_eq!(Operation::from_code(op.code().into()), Some(*op));
        }
    }

    #[test]
    fn out_of_table_codes_do_not_resolve() {
        assert_eq!(Operation::from_code(-1), None);
        assert_eq!(Operation::from_code(Operation::ALL.len() as i64), None);
        assert_eq!(Operation::from_code(Operation::UNKNOWN.into()), None);
        assert_eq!(Operation::from_code(1 << 32), None);
    }

    #[test]
    fn whole_valued_floats_resolve() {
        let n = |f: f64| Number::from_f64(f).unwrap();
        assert_eq!(Operation::from_number(&n(5.0)), Some(Operation::Ping));
        assert_eq!(Operation::from_number(&n(0.0)), Some(Operation::Subscribe));
        assert_eq!(Operation::from_number(&n(5.5)), None);
        assert_eq!(Operation::from_number(&n(-1.0)), None);
        assert_eq!(Operation::from_number(&n(13.0)), None);
        assert_eq!(Operation::from_number(&n(4294967296.0)), None);
        assert_eq!(Operation::from_number(&Number::from(u64::MAX)), None);
    }
}
