//! Respawn decisions across a player's lifecycle events.
//!
//! The host forwards five events here:
//!
//! - death: keep a nearby bed, otherwise search for a temporary respawn point
//! - join world: restore the live respawn pointer from the persisted state
//! - set spawn: remember a non-forced spawn change (a player using a bed)
//! - clone: carry the persisted state over to the post-death player record
//! - capability attach: give every real player exactly one state
//!
//! Handlers never fail. Anything unexpected is logged and the player falls
//! back to the host's default spawn.

use respawn_utils::random::{LegacyRandom, Random};
use respawn_utils::{BlockPos, GlobalPos};
use uuid::Uuid;

use crate::config::RespawnConfig;
use crate::error::RespawnError;
use crate::host::{AttachTarget, RespawnPlayer, RespawnPoint, RespawnWorld};
use crate::locator::{FIND_SPAWN_ATTEMPTS, RespawnLocator};
use crate::state::{PersistedRespawnState, PlayerStateStore};

/// What [`RespawnLifecycle::on_death`] decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathOutcome {
    /// The dimension has no anchor respawning; the host's default applies.
    AnchorUnsupported,
    /// The bed resolves to this position, close enough to the death location.
    AnchorInRange(BlockPos),
    /// A temporary respawn point was found and written to the player.
    Relocated(BlockPos),
    /// The search found nothing; the host's default applies.
    SearchExhausted,
}

/// Coordinates respawn points between the persisted state and the host's
/// live respawn pointer.
pub struct RespawnLifecycle<S: PlayerStateStore, R: Random = LegacyRandom> {
    config: RespawnConfig,
    store: S,
    locator: RespawnLocator<R>,
}

impl<S: PlayerStateStore> RespawnLifecycle<S, LegacyRandom> {
    /// Creates the lifecycle with an entropy-seeded locator.
    #[must_use]
    pub fn new(config: RespawnConfig, store: S) -> Self {
        Self::with_locator(config, store, RespawnLocator::new())
    }
}

impl<S: PlayerStateStore, R: Random> RespawnLifecycle<S, R> {
    /// Creates the lifecycle with an explicit locator.
    #[must_use]
    pub const fn with_locator(
        config: RespawnConfig,
        store: S,
        locator: RespawnLocator<R>,
    ) -> Self {
        Self {
            config,
            store,
            locator,
        }
    }

    /// The state store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the lifecycle, returning the store for saving.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Handles a player death at `death_location` in `world`.
    ///
    /// A bed that still resolves within `bed_range` (Manhattan) of the death
    /// location is left alone. Otherwise a random location is searched and, if
    /// found, set as a non-forced respawn point. The persisted state is not
    /// touched, so the next join restores whatever was stored before.
    pub fn on_death<P, W>(
        &mut self,
        player: &mut P,
        world: &W,
        death_location: BlockPos,
    ) -> DeathOutcome
    where
        P: RespawnPlayer,
        W: RespawnWorld,
    {
        if !world.supports_anchor_respawn() {
            return DeathOutcome::AnchorUnsupported;
        }

        match self.anchor_in_range(player, world, death_location) {
            Ok(Some(spawn)) => {
                log::debug!("Player {} is within the range of its bed", player.name());
                return DeathOutcome::AnchorInRange(spawn);
            }
            Ok(None) => {}
            Err(e) => log::debug!("{e}, searching for a respawn location"),
        }

        let Some(respawn) = self.locator.find_valid_respawn_location(
            death_location,
            self.config.min_respawn_distance,
            self.config.max_respawn_distance,
            world,
        ) else {
            log::debug!(
                "{}",
                RespawnError::SearchExhausted {
                    attempts: FIND_SPAWN_ATTEMPTS
                }
            );
            return DeathOutcome::SearchExhausted;
        };

        player.set_respawn_position(RespawnPoint::unforced(
            world.dimension().clone(),
            Some(respawn),
        ));
        log::debug!("Set temporary respawn location to {respawn}");
        DeathOutcome::Relocated(respawn)
    }

    /// Resolves the player's bed and returns it if it is within `bed_range`.
    fn anchor_in_range<P, W>(
        &self,
        player: &P,
        world: &W,
        death_location: BlockPos,
    ) -> Result<Option<BlockPos>, RespawnError>
    where
        P: RespawnPlayer,
        W: RespawnWorld,
    {
        let Some(anchor) = player.respawn_anchor() else {
            return Ok(None);
        };
        let spawn = world
            .resolve_anchor(anchor, 0.0)
            .ok_or(RespawnError::UnresolvableAnchor { anchor })?;
        let distance = death_location.manhattan_distance(&spawn);
        Ok((distance <= i64::from(self.config.bed_range)).then_some(spawn))
    }

    /// Handles a player entering `world`, including the respawn after death.
    ///
    /// Overwrites the live respawn pointer with the persisted point, or with
    /// world spawn if none is stored or it does not resolve in this world.
    pub fn on_join_world<P, W>(&self, player: &mut P, world: &W)
    where
        P: RespawnPlayer,
        W: RespawnWorld,
    {
        if !player.is_alive() {
            return;
        }

        let state = match self.state(player.uuid()) {
            Ok(state) => state,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };

        let respawn = state
            .position()
            .and_then(|stored| world.resolve_stored_position(stored));
        player.set_respawn_position(RespawnPoint::unforced(world.dimension().clone(), respawn));

        match respawn {
            Some(pos) => log::debug!(
                "Setting the respawn position of player {} back to {pos}",
                player.name()
            ),
            None => log::debug!(
                "Setting the respawn position of player {} back to world spawn",
                player.name()
            ),
        }
    }

    /// Handles the host changing a player's spawn point.
    ///
    /// Forced changes come from commands or the server itself and are not
    /// remembered. A cleared spawn (`None`) is ignored as well.
    pub fn on_set_spawn<P>(&mut self, player: &P, new_spawn: Option<BlockPos>, forced: bool)
    where
        P: RespawnPlayer,
    {
        if forced {
            return;
        }
        let Some(new_spawn) = new_spawn else {
            return;
        };

        let uuid = player.uuid();
        let Some(state) = self.store.get_mut(&uuid) else {
            log::warn!("{}", RespawnError::MissingState { player: uuid });
            return;
        };
        state.set_position(GlobalPos::new(player.dimension().clone(), new_spawn));
        log::debug!(
            "Updating the respawn location of player {} to {new_spawn}",
            player.name()
        );
    }

    /// Handles the host replacing a player record with a new one.
    ///
    /// Only deaths carry the state over, overwriting whatever the new record
    /// holds.
    pub fn on_clone(&mut self, original: Uuid, clone: Uuid, was_death: bool) {
        if !was_death {
            return;
        }

        let source = match self.state(original) {
            Ok(state) => state.clone(),
            Err(e) => {
                log::warn!("{e}");
                return;
            }
        };
        let Some(target) = self.store.get_mut(&clone) else {
            log::warn!("{}", RespawnError::MissingState { player: clone });
            return;
        };
        target.copy_from(&source);
        log::debug!("Copying respawn location state of player {original} to {clone}");
    }

    /// Attaches a fresh state to real players that have none yet.
    ///
    /// Returns `true` if a state was attached, mirroring
    /// [`PlayerStateStore::attach`]. Event-bus hosts can ignore the value; it
    /// lets a host that attaches lazily on first login tell a new player from
    /// a returning one without a second store lookup.
    pub fn on_capability_attach(&mut self, target: &AttachTarget) -> bool {
        if !target.is_real_player() || self.store.contains(&target.uuid) {
            return false;
        }
        let attached = self.store.attach(target.uuid);
        if attached {
            log::debug!("Attaching respawn state to player {}", target.uuid);
        }
        attached
    }

    fn state(&self, player: Uuid) -> Result<&PersistedRespawnState, RespawnError> {
        self.store
            .get(&player)
            .ok_or(RespawnError::MissingState { player })
    }
}
