use crate::application::{ActivityDraft, SessionCommand, SessionEvent};
use crate::domain::{ActivityId, ActivityKind, ActivityLog, Coordinates};
use crate::infrastructure::{ActivityStore, KeyValueStore, MapView, DEFAULT_ZOOM};

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPhase {
    /// Waiting for the geolocation request to resolve
    AwaitingLocation,
    /// Geolocation failed; the map and form never become available
    LocationDenied,
    /// Map is live, form hidden
    MapReady,
    /// Map is live and the form is open for a clicked location
    FormOpen {
        pending: Coordinates,
        kind: ActivityKind,
    },
}

/// The session's single stateful orchestrator.
///
/// Owns the activity log, the map handle, and the persistence adapter; all
/// state is private and reachable only through [`handle_command`] and the
/// read accessors. One instance per session, single-threaded; each command
/// runs to completion before the next.
///
/// [`handle_command`]: SessionController::handle_command
pub struct SessionController<M: MapView, S: KeyValueStore> {
    map: M,
    store: ActivityStore<S>,
    log: ActivityLog,
    phase: SessionPhase,
}

impl<M: MapView, S: KeyValueStore> SessionController<M, S> {
    /// Start a session: restore the persisted log (an unreadable blob
    /// degrades to an empty log) and wait for geolocation.
    ///
    /// List entries can render from [`activities`] immediately; markers are
    /// replayed once the map becomes ready.
    ///
    /// [`activities`]: SessionController::activities
    pub fn new(map: M, store: S) -> Self {
        let store = ActivityStore::new(store);
        let log = match store.load() {
            Ok(log) => {
                tracing::info!(count = log.len(), "restored activity log");
                log
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable activity log");
                ActivityLog::new()
            }
        };

        Self {
            map,
            store,
            log,
            phase: SessionPhase::AwaitingLocation,
        }
    }

    // ===== Read accessors =====

    pub fn activities(&self) -> &[crate::domain::Activity] {
        self.log.activities()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn pending_coordinates(&self) -> Option<Coordinates> {
        match self.phase {
            SessionPhase::FormOpen { pending, .. } => Some(pending),
            _ => None,
        }
    }

    // ===== Command processing =====

    /// Process a single command. `None` means nothing observable happened
    /// (e.g. a stale list entry was clicked).
    pub fn handle_command(&mut self, command: SessionCommand) -> Option<SessionEvent> {
        match command {
            SessionCommand::LocationAcquired { coordinates } => {
                self.handle_location_acquired(coordinates)
            }
            SessionCommand::LocationFailed => self.handle_location_failed(),
            SessionCommand::MapClicked { coordinates } => self.handle_map_clicked(coordinates),
            SessionCommand::KindSelected { kind } => self.handle_kind_selected(kind),
            SessionCommand::SubmitActivity { draft } => self.handle_submit(draft),
            SessionCommand::EntryClicked { id } => self.handle_entry_clicked(id),
            SessionCommand::Reset => self.handle_reset(),
        }
    }

    fn handle_location_acquired(&mut self, center: Coordinates) -> Option<SessionEvent> {
        if self.phase != SessionPhase::AwaitingLocation {
            return Some(failed("LocationAcquired", "session already has a map view"));
        }

        self.map.center_on(center, DEFAULT_ZOOM);
        for activity in self.log.iter() {
            self.map
                .place_marker(activity.coordinates(), activity.label(), activity.kind());
        }

        self.phase = SessionPhase::MapReady;
        tracing::info!(%center, markers = self.log.len(), "map initialized");
        Some(SessionEvent::MapInitialized { center })
    }

    fn handle_location_failed(&mut self) -> Option<SessionEvent> {
        if self.phase != SessionPhase::AwaitingLocation {
            return Some(failed("LocationFailed", "session already has a map view"));
        }

        self.phase = SessionPhase::LocationDenied;
        tracing::warn!("geolocation unavailable, map features blocked for this session");
        Some(SessionEvent::LocationUnavailable)
    }

    fn handle_map_clicked(&mut self, coordinates: Coordinates) -> Option<SessionEvent> {
        let kind = match self.phase {
            SessionPhase::MapReady => ActivityKind::Run,
            // Clicking while the form is open re-targets the pending
            // location and keeps the selected kind.
            SessionPhase::FormOpen { kind, .. } => kind,
            _ => return Some(failed("MapClicked", "map is not ready")),
        };

        self.phase = SessionPhase::FormOpen {
            pending: coordinates,
            kind,
        };
        Some(SessionEvent::FormOpened { coordinates })
    }

    fn handle_kind_selected(&mut self, kind: ActivityKind) -> Option<SessionEvent> {
        match self.phase {
            SessionPhase::FormOpen { pending, .. } => {
                self.phase = SessionPhase::FormOpen { pending, kind };
                Some(SessionEvent::KindSelected { kind })
            }
            _ => Some(failed("KindSelected", "form is not open")),
        }
    }

    fn handle_submit(&mut self, draft: ActivityDraft) -> Option<SessionEvent> {
        let pending = match self.phase {
            SessionPhase::FormOpen { pending, .. } => pending,
            _ => return Some(failed("SubmitActivity", "form is not open")),
        };

        let activity = match draft.into_activity(pending) {
            Ok(activity) => activity,
            Err(reason) => {
                tracing::debug!(error = %reason, "form submission rejected");
                return Some(SessionEvent::SubmitRejected { reason });
            }
        };

        // Mutation and rendering complete before this event's persist.
        self.log.push(activity.clone());
        self.map
            .place_marker(activity.coordinates(), activity.label(), activity.kind());
        if let Err(err) = self.store.save(&self.log) {
            tracing::warn!(error = %err, "failed to persist activity log");
        }

        self.phase = SessionPhase::MapReady;
        tracing::info!(id = %activity.id(), kind = %activity.kind(), "activity logged");
        Some(SessionEvent::ActivityLogged { activity })
    }

    fn handle_entry_clicked(&mut self, id: ActivityId) -> Option<SessionEvent> {
        if !matches!(
            self.phase,
            SessionPhase::MapReady | SessionPhase::FormOpen { .. }
        ) {
            return None;
        }

        // A stale DOM reference is the only way to miss; ignore it.
        let activity = match self.log.get(id) {
            Some(activity) => activity,
            None => {
                tracing::debug!(%id, "pan target not found");
                return None;
            }
        };

        self.map.fly_to(activity.coordinates(), DEFAULT_ZOOM);
        Some(SessionEvent::EntryFocused { id })
    }

    fn handle_reset(&mut self) -> Option<SessionEvent> {
        if let Err(err) = self.store.reset() {
            tracing::warn!(error = %err, "failed to clear persisted state");
        }
        self.log.clear();
        self.phase = SessionPhase::AwaitingLocation;
        tracing::info!("session reset");
        Some(SessionEvent::SessionReset)
    }
}

fn failed(command: &str, reason: &str) -> SessionEvent {
    SessionEvent::CommandFailed {
        command: command.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    /// Map stub for phase-transition tests; call recording lives in the
    /// integration suite's mock.
    struct NullMap;

    impl MapView for NullMap {
        fn center_on(&mut self, _: Coordinates, _: u8) {}
        fn fly_to(&mut self, _: Coordinates, _: u8) {}
        fn place_marker(&mut self, _: Coordinates, _: &str, _: ActivityKind) {}
    }

    fn controller() -> SessionController<NullMap, MemoryStore> {
        SessionController::new(NullMap, MemoryStore::new())
    }

    #[test]
    fn starts_awaiting_location_with_an_empty_log() {
        let controller = controller();

        assert_eq!(controller.phase(), SessionPhase::AwaitingLocation);
        assert!(controller.activities().is_empty());
    }

    #[test]
    fn location_success_reaches_map_ready() {
        let mut controller = controller();

        let event = controller.handle_command(SessionCommand::LocationAcquired {
            coordinates: Coordinates::new(48.0, 11.0),
        });

        assert!(matches!(event, Some(SessionEvent::MapInitialized { .. })));
        assert_eq!(controller.phase(), SessionPhase::MapReady);
    }

    #[test]
    fn location_failure_blocks_the_map_for_the_session() {
        let mut controller = controller();

        let event = controller.handle_command(SessionCommand::LocationFailed);

        assert_eq!(event, Some(SessionEvent::LocationUnavailable));
        assert_eq!(controller.phase(), SessionPhase::LocationDenied);

        // The map never becomes available afterwards.
        let event = controller.handle_command(SessionCommand::MapClicked {
            coordinates: Coordinates::new(1.0, 2.0),
        });
        assert!(matches!(event, Some(SessionEvent::CommandFailed { .. })));
    }

    #[test]
    fn map_click_before_location_is_rejected() {
        let mut controller = controller();

        let event = controller.handle_command(SessionCommand::MapClicked {
            coordinates: Coordinates::new(1.0, 2.0),
        });

        assert!(matches!(event, Some(SessionEvent::CommandFailed { .. })));
        assert_eq!(controller.phase(), SessionPhase::AwaitingLocation);
    }

    #[test]
    fn map_click_opens_the_form_at_the_clicked_point() {
        let mut controller = controller();
        controller.handle_command(SessionCommand::LocationAcquired {
            coordinates: Coordinates::new(48.0, 11.0),
        });

        let clicked = Coordinates::new(10.0, 20.0);
        let event = controller.handle_command(SessionCommand::MapClicked {
            coordinates: clicked,
        });

        assert_eq!(
            event,
            Some(SessionEvent::FormOpened {
                coordinates: clicked
            })
        );
        assert_eq!(controller.pending_coordinates(), Some(clicked));
    }

    #[test]
    fn kind_toggle_keeps_the_form_open() {
        let mut controller = controller();
        controller.handle_command(SessionCommand::LocationAcquired {
            coordinates: Coordinates::new(48.0, 11.0),
        });
        controller.handle_command(SessionCommand::MapClicked {
            coordinates: Coordinates::new(10.0, 20.0),
        });

        let event = controller.handle_command(SessionCommand::KindSelected {
            kind: ActivityKind::Ride,
        });

        assert_eq!(
            event,
            Some(SessionEvent::KindSelected {
                kind: ActivityKind::Ride
            })
        );
        assert!(matches!(
            controller.phase(),
            SessionPhase::FormOpen {
                kind: ActivityKind::Ride,
                ..
            }
        ));
    }

    #[test]
    fn submit_without_an_open_form_is_rejected() {
        let mut controller = controller();

        let event = controller.handle_command(SessionCommand::SubmitActivity {
            draft: ActivityDraft::Run {
                distance_km: 5.0,
                duration_min: 25.0,
                cadence_spm: 150.0,
            },
        });

        assert!(matches!(event, Some(SessionEvent::CommandFailed { .. })));
        assert!(controller.activities().is_empty());
    }

    #[test]
    fn invalid_submission_stays_in_the_form() {
        let mut controller = controller();
        controller.handle_command(SessionCommand::LocationAcquired {
            coordinates: Coordinates::new(48.0, 11.0),
        });
        controller.handle_command(SessionCommand::MapClicked {
            coordinates: Coordinates::new(10.0, 20.0),
        });

        let event = controller.handle_command(SessionCommand::SubmitActivity {
            draft: ActivityDraft::Run {
                distance_km: 0.0,
                duration_min: 25.0,
                cadence_spm: 150.0,
            },
        });

        assert!(matches!(event, Some(SessionEvent::SubmitRejected { .. })));
        assert!(controller.activities().is_empty());
        assert!(matches!(controller.phase(), SessionPhase::FormOpen { .. }));
    }

    #[test]
    fn reset_returns_to_awaiting_location() {
        let mut controller = controller();
        controller.handle_command(SessionCommand::LocationAcquired {
            coordinates: Coordinates::new(48.0, 11.0),
        });

        let event = controller.handle_command(SessionCommand::Reset);

        assert_eq!(event, Some(SessionEvent::SessionReset));
        assert_eq!(controller.phase(), SessionPhase::AwaitingLocation);
    }
}
