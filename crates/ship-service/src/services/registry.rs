//! Command registry
//!
//! Fixed table mapping command names to handlers, response strategies, and
//! the admin gate. Dispatch consults this once per interaction; unknown
//! names fall through to the fixed fallback reply.

/// Handlers a command name can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ship,
    RandomShip,
    ManageShips,
    Support,
    EditShipCount,
    Leaderboard,
}

/// Response strategy for a command.
///
/// Deferred commands acknowledge immediately with a placeholder and deliver
/// their content via a follow-up edit; everything that performs a platform
/// REST call or a store round trip defers so the platform's response budget
/// is never exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Immediate,
    Deferred,
}

/// One registry entry
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub command: Command,
    pub strategy: Strategy,
    pub admin_only: bool,
}

/// Look up a command by its wire name.
///
/// `createship` and `editship` are two historical names for the same
/// management command.
pub fn find(name: &str) -> Option<CommandSpec> {
    let spec = match name {
        "ship" => CommandSpec {
            command: Command::Ship,
            strategy: Strategy::Deferred,
            admin_only: false,
        },
        "randomship" => CommandSpec {
            command: Command::RandomShip,
            strategy: Strategy::Deferred,
            admin_only: false,
        },
        "createship" | "editship" => CommandSpec {
            command: Command::ManageShips,
            strategy: Strategy::Deferred,
            admin_only: true,
        },
        "support" => CommandSpec {
            command: Command::Support,
            strategy: Strategy::Deferred,
            admin_only: false,
        },
        "edit_ship_count" => CommandSpec {
            command: Command::EditShipCount,
            strategy: Strategy::Deferred,
            admin_only: true,
        },
        "leaderboard" => CommandSpec {
            command: Command::Leaderboard,
            strategy: Strategy::Deferred,
            admin_only: false,
        },
        _ => return None,
    };
    Some(spec)
}
