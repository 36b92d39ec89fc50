use super::error::FormError;
use super::opponents::Opponents;
use super::registry::Registry;
use super::role::Role;
use super::role::Seat;
use super::slot::SlotView;
use super::snapshot::Snapshot;
use super::validator::Validation;
use super::validator::revalidate;
use super::variant::OpponentMode;
use super::variant::Variant;
use crate::SequenceId;
use crate::cards::Card;
use crate::dto::ApiEquity;
use crate::dto::Request;
use crate::present::Summary;
use crate::submit::BuildError;
use crate::submit::Options;
use crate::submit::Precision;
use crate::submit::SubmitError;
use crate::submit::TransportError;
use crate::submit::build;

/// Callback fired with the full duplicate set after every revalidation.
pub type Listener = Box<dyn FnMut(&Validation)>;

/// What the last finished submission left on screen.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Equity(Summary),
    Failure(String),
}

/// The variant form: which game is selected, how opponents are entered, and
/// the slots that configuration requires.
///
/// Every mutation runs to completion and leaves the registry matching the
/// current layout and the duplicate set matching the registry. Duplicates
/// are recomputed from scratch after every change and pushed to
/// subscribers.
///
/// Submitting is split around the one suspension point: [`Form::begin`]
/// builds the request and marks the form busy, [`Form::settle`] records
/// whatever came back. Nothing between the two touches the form.
pub struct Form {
    variant: Option<Variant>,
    omaha: OpponentMode,
    stud: OpponentMode,
    range: String,
    options: Options,
    opponents: Opponents,
    registry: Registry,
    flagged: Validation,
    outcome: Option<Outcome>,
    pending: Option<Variant>,
    listeners: Vec<Listener>,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            variant: None,
            omaha: OpponentMode::Single,
            stud: OpponentMode::Single,
            range: String::new(),
            options: Options::default(),
            opponents: Opponents::default(),
            registry: Registry::default(),
            flagged: Validation::new(),
            outcome: None,
            pending: None,
            listeners: Vec::new(),
        }
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }
    /// Opponent mode of the selected game family.
    pub fn mode(&self) -> OpponentMode {
        match self.variant {
            Some(Variant::Stud(_)) => self.stud,
            Some(_) => self.omaha,
            None => OpponentMode::Single,
        }
    }
    pub fn range(&self) -> &str {
        &self.range
    }
    pub fn precision(&self) -> Precision {
        self.options.precision
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn opponents(&self) -> &Opponents {
        &self.opponents
    }
    /// Slots currently flagged as duplicates.
    pub fn flagged(&self) -> &Validation {
        &self.flagged
    }
    pub fn malformed(&self) -> Vec<Role> {
        self.registry.malformed().collect()
    }
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
    /// Whether a request is in flight. The submit control stays disabled meanwhile.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Every visible slot with its error marks, in role order.
    pub fn views(&self) -> Vec<SlotView> {
        self.registry
            .slots()
            .map(|slot| SlotView {
                id: slot.role().to_string(),
                label: slot.role().label(),
                value: slot.value(),
                malformed: slot.is_malformed(),
                duplicate: self.flagged.contains(&slot.role()),
            })
            .collect()
    }

    /// Register for duplicate-set updates. The listener fires once right away.
    pub fn subscribe<F>(&mut self, mut listener: F)
    where
        F: FnMut(&Validation) + 'static,
    {
        listener(&self.flagged);
        self.listeners.push(Box::new(listener));
    }

    /// Switch games. Results and errors are cleared; card values survive
    /// wherever the new game keeps their slot.
    pub fn select(&mut self, variant: Option<Variant>) {
        log::info!(
            "game type {}",
            variant.map(|v| v.to_string()).unwrap_or_else(|| String::from("cleared"))
        );
        self.variant = variant;
        self.outcome = None;
        self.seed_opponent();
        self.relayout();
    }

    /// Switch how opponents are entered for the selected game. Hero and
    /// board slots are untouched.
    pub fn set_mode(&mut self, mode: OpponentMode) {
        match self.variant {
            Some(Variant::Stud(_)) => self.stud = mode,
            Some(_) => self.omaha = mode,
            None => return,
        }
        log::debug!("opponent mode {}", mode);
        self.seed_opponent();
        self.relayout();
    }

    pub fn add_opponent(&mut self) -> Result<SequenceId, FormError> {
        match (self.variant, self.stud) {
            (Some(Variant::Stud(_)), OpponentMode::Range) => {
                let id = self.opponents.add();
                log::debug!("opponent {} added", id);
                self.relayout();
                Ok(id)
            }
            _ => Err(FormError::NotMultiOpponent),
        }
    }

    pub fn remove_opponent(&mut self, id: SequenceId) -> Result<(), FormError> {
        self.opponents
            .remove(id)
            .ok_or(FormError::UnknownOpponent(id))?;
        log::debug!("opponent {} removed", id);
        self.relayout();
        Ok(())
    }

    /// Type a raw token into a slot.
    pub fn set_card(&mut self, role: Role, raw: &str) -> Result<Option<Card>, FormError> {
        let card = self.registry.set_value(role, raw)?;
        self.revalidate();
        Ok(card)
    }
    /// [`Form::set_card`] addressed by slot identifier.
    pub fn set_card_by_id(&mut self, id: &str, raw: &str) -> Result<Option<Card>, FormError> {
        self.set_card(Role::try_from(id)?, raw)
    }
    pub fn set_range(&mut self, text: &str) {
        self.range = text.to_string();
    }
    pub fn set_precision(&mut self, precision: Precision) {
        self.options.precision = precision;
    }

    /// Start over: no game, no slots, and opponent numbering from 1 again.
    /// Subscribers stay attached, and an in-flight request still settles.
    pub fn reset(&mut self) {
        log::info!("form reset");
        let listeners = std::mem::take(&mut self.listeners);
        let pending = self.pending;
        *self = Self {
            listeners,
            pending,
            ..Self::default()
        };
        self.relayout();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.registry, &self.opponents, &self.range)
    }

    /// The request a submit would send right now, without marking the form busy.
    pub fn request(&self) -> Result<Request, BuildError> {
        let variant = self.variant.ok_or(BuildError::NoVariant)?;
        let request = build(variant, self.mode(), &self.snapshot(), &self.options)?;
        match self.flagged.is_empty() {
            true => Ok(request),
            false => Err(BuildError::Duplicate),
        }
    }

    /// First half of a submit. Refuses while another request is in flight;
    /// otherwise clears the previous outcome and builds. A build error is
    /// recorded as the outcome and nothing is sent.
    pub fn begin(&mut self) -> Result<Request, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::Busy);
        }
        self.outcome = None;
        match self.request() {
            Err(e) => {
                log::warn!("not submitted: {}", e);
                self.outcome = Some(Outcome::Failure(e.to_string()));
                Err(SubmitError::Build(e))
            }
            Ok(request) => {
                log::info!("submitting {} to {}", self.variant.map(|v| v.to_string()).unwrap_or_default(), request.path());
                self.pending = self.variant;
                Ok(request)
            }
        }
    }

    /// Second half of a submit: record the service's answer and re-enable submitting.
    pub fn settle(&mut self, result: Result<ApiEquity, TransportError>) {
        let variant = self.pending.take();
        self.outcome = Some(match result {
            Ok(ref equity) => Outcome::Equity(Summary::new(equity, variant)),
            Err(e) => {
                log::warn!("calculation failed: {}", e);
                Outcome::Failure(e.to_string())
            }
        });
    }

    fn layout(&self) -> Vec<Role> {
        let mut roles = Vec::new();
        match (self.variant, self.mode()) {
            (None, _) => {}
            (Some(Variant::Stud(_)), mode) => {
                roles.extend(Role::stud(Seat::Hero));
                match mode {
                    OpponentMode::Single => roles.extend(Role::stud(Seat::Villain)),
                    OpponentMode::Range => roles.extend(self.opponents.roles()),
                }
            }
            (Some(variant), mode) => {
                if let Some(n) = variant.hole_cards() {
                    roles.extend(Role::hand(n));
                    roles.extend(Role::board());
                    if mode == OpponentMode::Single {
                        roles.extend(Role::opponent(n));
                    }
                }
            }
        }
        roles
    }

    fn seed_opponent(&mut self) {
        if let (Some(Variant::Stud(_)), OpponentMode::Range) = (self.variant, self.stud) {
            if self.opponents.is_fresh() {
                self.opponents.add();
            }
        }
    }

    fn relayout(&mut self) {
        let roles = self.layout();
        self.registry.set_slots(roles);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.flagged = revalidate(self.registry.all_values());
        if !self.flagged.is_empty() {
            log::debug!("{} slots hold duplicate cards", self.flagged.len());
        }
        for listener in self.listeners.iter_mut() {
            listener(&self.flagged);
        }
    }
}
