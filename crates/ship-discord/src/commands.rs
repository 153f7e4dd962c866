//! Slash-command definitions
//!
//! The payload for the bulk-overwrite registration call
//! (`PUT /applications/{application_id}/commands`).

use serde_json::{json, Value};

// Application command option types
const OPTION_STRING: u8 = 3;
const OPTION_INTEGER: u8 = 4;
const OPTION_USER: u8 = 6;

/// All slash commands this bot answers to
pub fn command_definitions() -> Value {
    json!([
        {
            "name": "ship",
            "description": "Check the compatibility of two users",
            "options": [
                {"name": "user1", "description": "First user", "type": OPTION_USER, "required": true},
                {"name": "user2", "description": "Second user", "type": OPTION_USER, "required": true}
            ]
        },
        {
            "name": "randomship",
            "description": "Ship two random members of this server"
        },
        {
            "name": "createship",
            "description": "Manage the ship roster (admin only)",
            "options": [
                {
                    "name": "action",
                    "description": "What to do",
                    "type": OPTION_STRING,
                    "required": true,
                    "choices": [
                        {"name": "add", "value": "add"},
                        {"name": "edit", "value": "edit"},
                        {"name": "remove", "value": "remove"}
                    ]
                },
                {"name": "user1", "description": "First user", "type": OPTION_USER, "required": false},
                {"name": "user2", "description": "Second user", "type": OPTION_USER, "required": false},
                {"name": "name", "description": "Ship name", "type": OPTION_STRING, "required": false}
            ]
        },
        {
            "name": "support",
            "description": "Support a ship",
            "options": [
                {"name": "name", "description": "Ship name", "type": OPTION_STRING, "required": true}
            ]
        },
        {
            "name": "edit_ship_count",
            "description": "Set a ship's support count (admin only)",
            "options": [
                {"name": "name", "description": "Ship name", "type": OPTION_STRING, "required": true},
                {"name": "support", "description": "New support count", "type": OPTION_INTEGER, "required": true}
            ]
        },
        {
            "name": "leaderboard",
            "description": "Show the top supported ships"
        }
    ])
}
