//! ShipModel -> Ship entity conversion

use ship_core::{Ship, ShipId, UserId};

use crate::models::ShipModel;

impl From<ShipModel> for Ship {
    fn from(model: ShipModel) -> Self {
        Ship {
            id: ShipId::new(model.id),
            user1_id: UserId::new(model.user1_id),
            user2_id: UserId::new(model.user2_id),
            name: model.name,
            support_count: model.support_count,
        }
    }
}
