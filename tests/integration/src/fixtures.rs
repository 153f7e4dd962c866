//! Test fixtures - in-memory store and recording platform client
//!
//! Both implement the real ports so the full application stack runs without
//! external services.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use ship_core::entities::Ship;
use ship_core::error::DomainError;
use ship_core::traits::{PlatformClient, PlatformUser, RepoResult, ShipStore};
use ship_core::value_objects::{ShipId, UserId};

/// In-memory `ShipStore` obeying the storage contract
#[derive(Default)]
pub struct MemoryShipStore {
    ships: Mutex<Vec<Ship>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ShipStore for MemoryShipStore {
    async fn create(&self, user1: &UserId, user2: &UserId, name: &str) -> RepoResult<Ship> {
        let mut ships = self.ships.lock().unwrap();
        if ships.iter().any(|s| s.matches_name(name)) {
            return Err(DomainError::DuplicateName(name.to_string()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let ship = Ship::new(
            ShipId::new(id),
            user1.clone(),
            user2.clone(),
            name.to_string(),
        );
        ships.push(ship.clone());
        Ok(ship)
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Ship>> {
        Ok(self
            .ships
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.matches_name(name))
            .cloned())
    }

    async fn find_by_pair(&self, user1: &UserId, user2: &UserId) -> RepoResult<Option<Ship>> {
        Ok(self
            .ships
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.involves(user1, user2))
            .cloned())
    }

    async fn rename(&self, user1: &UserId, user2: &UserId, new_name: &str) -> RepoResult<Ship> {
        let mut ships = self.ships.lock().unwrap();
        if ships
            .iter()
            .any(|s| s.matches_name(new_name) && !s.involves(user1, user2))
        {
            return Err(DomainError::DuplicateName(new_name.to_string()));
        }
        let ship = ships
            .iter_mut()
            .find(|s| s.involves(user1, user2))
            .ok_or(DomainError::PairNotFound)?;
        ship.name = new_name.to_string();
        Ok(ship.clone())
    }

    async fn delete(&self, name: &str) -> RepoResult<()> {
        let mut ships = self.ships.lock().unwrap();
        let before = ships.len();
        ships.retain(|s| !s.matches_name(name));
        if ships.len() == before {
            return Err(DomainError::ShipNotFound(name.to_string()));
        }
        Ok(())
    }

    async fn increment_support(&self, name: &str) -> RepoResult<i64> {
        // The mutex makes the read-modify-write a single critical section,
        // matching the atomicity the real backends provide.
        let mut ships = self.ships.lock().unwrap();
        let ship = ships
            .iter_mut()
            .find(|s| s.matches_name(name))
            .ok_or_else(|| DomainError::ShipNotFound(name.to_string()))?;
        ship.support_count += 1;
        Ok(ship.support_count)
    }

    async fn set_support(&self, name: &str, value: i64) -> RepoResult<()> {
        if value < 0 {
            return Err(DomainError::InvalidSupportValue(value));
        }
        let mut ships = self.ships.lock().unwrap();
        let ship = ships
            .iter_mut()
            .find(|s| s.matches_name(name))
            .ok_or_else(|| DomainError::ShipNotFound(name.to_string()))?;
        ship.support_count = value;
        Ok(())
    }

    async fn top_by_score(&self, limit: usize) -> RepoResult<Vec<Ship>> {
        let mut ships = self.ships.lock().unwrap().clone();
        ships.sort_by(|a, b| b.support_count.cmp(&a.support_count).then(a.id.cmp(&b.id)));
        ships.truncate(limit);
        Ok(ships)
    }
}

/// One recorded follow-up edit
#[derive(Debug, Clone)]
pub struct FollowUpEdit {
    pub application_id: String,
    pub token: String,
    pub payload: serde_json::Value,
}

/// Platform client serving a fixed roster and recording follow-up edits
pub struct RecordingPlatform {
    users: Vec<PlatformUser>,
    edits: Mutex<Vec<FollowUpEdit>>,
}

impl RecordingPlatform {
    pub fn new(users: Vec<PlatformUser>) -> Self {
        Self {
            users,
            edits: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the recorded follow-up edits
    pub fn edits(&self) -> Vec<FollowUpEdit> {
        self.edits.lock().unwrap().clone()
    }

    /// Wait until at least `count` follow-up edits have been delivered.
    ///
    /// # Panics
    /// Panics if the edits do not arrive within two seconds.
    pub async fn wait_for_edits(&self, count: usize) -> Vec<FollowUpEdit> {
        for _ in 0..200 {
            let edits = self.edits();
            if edits.len() >= count {
                return edits;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "expected {count} follow-up edits, got {}",
            self.edits().len()
        );
    }
}

#[async_trait]
impl PlatformClient for RecordingPlatform {
    async fn get_user(&self, id: &UserId) -> RepoResult<PlatformUser> {
        self.users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| DomainError::FetchError(format!("no such user: {id}")))
    }

    async fn list_guild_members(&self, _guild_id: &str) -> RepoResult<Vec<PlatformUser>> {
        Ok(self.users.clone())
    }

    async fn edit_original_response(
        &self,
        application_id: &str,
        interaction_token: &str,
        payload: &serde_json::Value,
    ) -> RepoResult<()> {
        self.edits.lock().unwrap().push(FollowUpEdit {
            application_id: application_id.to_string(),
            token: interaction_token.to_string(),
            payload: payload.clone(),
        });
        Ok(())
    }
}

/// A platform user for test rosters
pub fn platform_user(id: &str, username: &str, bot: bool) -> PlatformUser {
    PlatformUser {
        id: UserId::new(id),
        username: username.to_string(),
        global_name: None,
        bot,
    }
}
