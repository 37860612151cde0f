use crate::theme::ThemeMode;

/// Side-effect seam between the theme state machine and its host
/// environment. Platform-specific implementations should provide this.
///
/// Every effect is idempotent and fully derivable from the current mode,
/// so a failed write self-corrects on the next transition.
pub trait ThemeEnvironment {
    type Error: std::error::Error;

    /// Raw persisted preference, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the preference store cannot be read.
    fn load_preference(&self) -> Result<Option<String>, Self::Error>;

    /// Overwrite the persisted preference with the mode's wire string.
    ///
    /// # Errors
    ///
    /// Returns an error when the preference store cannot be written.
    fn store_preference(&self, mode: ThemeMode) -> Result<(), Self::Error>;

    /// System-level dark preference signal. An unavailable signal reads
    /// as `false`.
    fn system_prefers_dark(&self) -> bool;

    /// Replace the presentation scope marker with the one for `mode`.
    /// At most one marker is active at a time.
    ///
    /// # Errors
    ///
    /// Returns an error when the presentation root cannot be reached.
    fn apply_scope_marker(&self, mode: ThemeMode) -> Result<(), Self::Error>;

    /// Replace the live-announcement text with a human-readable sentence
    /// naming `mode`. Implementations localize the wording.
    ///
    /// # Errors
    ///
    /// Returns an error when the announcement region is unavailable.
    fn announce(&self, mode: ThemeMode) -> Result<(), Self::Error>;
}

/// Resolve the startup mode. Precedence: a valid persisted value, else the
/// system dark signal, else light. Deterministic given store and signal
/// state; no side effects.
#[must_use]
pub fn initial_mode<E: ThemeEnvironment>(env: &E) -> ThemeMode {
    let stored = env.load_preference().ok().flatten();
    if let Some(mode) = stored.as_deref().and_then(ThemeMode::parse) {
        return mode;
    }
    if env.system_prefers_dark() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Single owner of the active [`ThemeMode`].
///
/// Consumers read the mode through [`ThemeController::mode`] and never
/// mutate it directly; every transition goes through [`set_mode`] or
/// [`cycle_mode`], which mirror the committed value into the environment
/// synchronously.
///
/// [`set_mode`]: ThemeController::set_mode
/// [`cycle_mode`]: ThemeController::cycle_mode
pub struct ThemeController<E: ThemeEnvironment> {
    env: E,
    mode: ThemeMode,
}

impl<E: ThemeEnvironment> ThemeController<E> {
    /// Resolve the startup mode and run one environment sync, so the
    /// initial mode is persisted, scoped, and announced exactly once.
    pub fn new(env: E) -> Self {
        let mode = initial_mode(&env);
        let controller = Self { env, mode };
        controller.sync_environment();
        controller
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Replace the current mode unconditionally and mirror it into the
    /// environment.
    pub fn set_mode(&mut self, next: ThemeMode) {
        self.mode = next;
        self.sync_environment();
    }

    /// Advance to the successor mode and return it.
    pub fn cycle_mode(&mut self) -> ThemeMode {
        let next = self.mode.next();
        self.set_mode(next);
        next
    }

    /// Mirror the current mode into persistence, the scope marker, and the
    /// announcement region. The three writes are independent: a failing one
    /// is logged and skipped without blocking the others, and nothing is
    /// rolled back. The in-memory mode stays authoritative either way.
    fn sync_environment(&self) {
        if let Err(err) = self.env.store_preference(self.mode) {
            log::warn!("theme preference not persisted: {err}");
        }
        if let Err(err) = self.env.apply_scope_marker(self.mode) {
            log::warn!("theme scope marker not applied: {err}");
        }
        if let Err(err) = self.env.announce(self.mode) {
            log::warn!("theme change not announced: {err}");
        }
    }
}
