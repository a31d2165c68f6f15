use model::Period;
use std::collections::HashMap;

/// How a shifting function moves its base instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// `DATE_ADD(d, INTERVAL ...)`
    Forward,
    /// `DATE_SUB(d, INTERVAL ...)`
    Backward,
    /// `DATEADD(unit, n, d)`, where the sign of `n` decides.
    Signed,
}

/// Semantic class of a date function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionRole {
    Truncate,
    Part(Period),
    Shift(ShiftDirection),
    Format,
    /// `NOW()`, `CURRENT_DATE` and friends: the present, no column.
    CurrentInstant,
}

/// Function name to role lookup, case-insensitive.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    roles: HashMap<String, FunctionRole>,
}

impl FunctionRegistry {
    /// Create a registry with all built-in date functions
    pub fn new() -> Self {
        let mut registry = Self {
            roles: HashMap::new(),
        };

        for name in ["date_trunc", "timestamp_trunc", "datetime_trunc", "trunc"] {
            registry.register(name, FunctionRole::Truncate);
        }

        registry.register("year", FunctionRole::Part(Period::Years));
        registry.register("quarter", FunctionRole::Part(Period::Quarters));
        registry.register("month", FunctionRole::Part(Period::Months));
        registry.register("week", FunctionRole::Part(Period::Weeks));
        registry.register("day", FunctionRole::Part(Period::Days));

        for name in ["dateadd", "timestampadd"] {
            registry.register(name, FunctionRole::Shift(ShiftDirection::Signed));
        }
        for name in ["date_add", "adddate", "timestamp_add", "datetime_add"] {
            registry.register(name, FunctionRole::Shift(ShiftDirection::Forward));
        }
        for name in ["date_sub", "subdate", "timestamp_sub", "datetime_sub"] {
            registry.register(name, FunctionRole::Shift(ShiftDirection::Backward));
        }

        for name in ["parse_timestamp", "parse_date", "format_timestamp", "format_date"] {
            registry.register(name, FunctionRole::Format);
        }

        for name in [
            "now",
            "current_date",
            "current_timestamp",
            "current_datetime",
            "curdate",
            "getdate",
            "sysdate",
            "localtimestamp",
            "sysdatetime",
        ] {
            registry.register(name, FunctionRole::CurrentInstant);
        }

        registry
    }

    pub fn register(&mut self, name: &str, role: FunctionRole) {
        self.roles.insert(name.to_lowercase(), role);
    }

    /// Role of a function. Unregistered names containing `TRUNC` still
    /// truncate.
    pub fn role(&self, name: &str) -> Option<FunctionRole> {
        let key = name.to_lowercase();
        self.roles
            .get(&key)
            .copied()
            .or_else(|| key.contains("trunc").then_some(FunctionRole::Truncate))
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.role(name).is_some()
    }

    pub fn is_current_instant(&self, name: &str) -> bool {
        self.role(name) == Some(FunctionRole::CurrentInstant)
    }

    pub fn function_names(&self) -> Vec<&str> {
        self.roles.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
