//! Query module — selectable aggregate operations over a log collection.

pub mod aggregate;
pub mod route;

/// The aggregate question to answer, selected by number on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// 1 — occurrences of each distinct action
    ActionCounts,
    /// 2 — distinct user names
    UniqueUsers,
    /// 3 — users with at least one 4xx response
    ErrorUsers,
    /// 4 — distinct client addresses
    UniqueIps,
    /// 5 — the user with the most records
    TopUser,
}

impl Query {
    pub fn as_str(&self) -> &'static str {
        match self {
            Query::ActionCounts => "action_counts",
            Query::UniqueUsers => "unique_users",
            Query::ErrorUsers => "error_users",
            Query::UniqueIps => "unique_ips",
            Query::TopUser => "top_user",
        }
    }

    /// Human title used for the report header.
    pub fn title(&self) -> &'static str {
        match self {
            Query::ActionCounts => "Action counts",
            Query::UniqueUsers => "Unique users",
            Query::ErrorUsers => "Users with 4xx errors",
            Query::UniqueIps => "Unique IPs",
            Query::TopUser => "Most frequent user",
        }
    }
}

impl TryFrom<u8> for Query {
    type Error = u8;

    fn try_from(selector: u8) -> Result<Self, u8> {
        match selector {
            1 => Ok(Query::ActionCounts),
            2 => Ok(Query::UniqueUsers),
            3 => Ok(Query::ErrorUsers),
            4 => Ok(Query::UniqueIps),
            5 => Ok(Query::TopUser),
            other => Err(other),
        }
    }
}
