use std::fmt;

macro_rules! plan_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

plan_id!(
    /// Caller-assigned identifier of a node in a house.
    NodeId,
    "node"
);
plan_id!(
    /// Caller-assigned identifier of a wall in a house.
    WallId,
    "wall"
);
plan_id!(
    /// Caller-assigned identifier of a room in a house.
    RoomId,
    "room"
);
