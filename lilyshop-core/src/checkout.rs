//! Checkout wizard state machine
//!
//! A linear four-step wizard with per-step gates: fulfillment method,
//! delivery address, optional add-ons, then identity/payment. Steps are a
//! closed enum rather than raw integers; a terminal `Completed` phase is
//! reached only by passing the final gate, at which point the draft is
//! consumed and every mutator becomes a no-op.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::{AddOnId, Bouquet, Catalog};
use crate::order::Order;

/// Steps of the checkout wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutStep {
    #[default]
    Fulfillment,
    Address,
    AddOns,
    Payment,
}

impl CheckoutStep {
    pub const FIRST: Self = Self::Fulfillment;
    pub const LAST: Self = Self::Payment;

    /// The step after this one, or `None` at the last step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Fulfillment => Some(Self::Address),
            Self::Address => Some(Self::AddOns),
            Self::AddOns => Some(Self::Payment),
            Self::Payment => None,
        }
    }

    /// The step before this one, or `None` at the first step.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Fulfillment => None,
            Self::Address => Some(Self::Fulfillment),
            Self::AddOns => Some(Self::Address),
            Self::Payment => Some(Self::AddOns),
        }
    }

    /// Human-readable title, as shown in the step indicator.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Fulfillment => "Delivery",
            Self::Address => "Address",
            Self::AddOns => "Add-ons",
            Self::Payment => "Payment",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fulfillment => "fulfillment",
            Self::Address => "address",
            Self::AddOns => "add-ons",
            Self::Payment => "payment",
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutStep {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fulfillment" => Ok(Self::Fulfillment),
            "address" => Ok(Self::Address),
            "add-ons" => Ok(Self::AddOns),
            "payment" => Ok(Self::Payment),
            _ => Err(()),
        }
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    /// Nothing chosen yet; the fulfillment gate refuses this.
    #[default]
    Unselected,
    Delivery,
    Pickup,
}

/// Delivery address collected during the address step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

impl Address {
    /// All four fields filled in. Emptiness only; no format validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.street.is_empty()
            && !self.city.is_empty()
            && !self.postal_code.is_empty()
            && !self.phone.is_empty()
    }
}

/// Whether the customer checks out as a guest or against an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Identity {
    #[default]
    Guest,
    Account,
}

/// Card details collected for account checkout.
///
/// Deliberately permissive demo-grade validation: fields are checked for
/// emptiness only. Do not reuse beyond a demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentInfo {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub cardholder: String,
}

impl PaymentInfo {
    /// Card number, expiry, and CVV present. Cardholder name is optional.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.card_number.is_empty() && !self.expiry.is_empty() && !self.cvv.is_empty()
    }
}

/// The in-progress purchase under construction by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    bouquet: Bouquet,
    quantity: u32,
    pub fulfillment: Fulfillment,
    pub address: Address,
    selected_add_ons: BTreeSet<AddOnId>,
    pub identity: Identity,
    pub payment: PaymentInfo,
}

impl OrderDraft {
    /// Start a draft for the given bouquet. Quantity is floored at 1.
    #[must_use]
    pub fn new(bouquet: Bouquet, quantity: u32) -> Self {
        Self {
            bouquet,
            quantity: quantity.max(1),
            fulfillment: Fulfillment::Unselected,
            address: Address::default(),
            selected_add_ons: BTreeSet::new(),
            identity: Identity::Guest,
            payment: PaymentInfo::default(),
        }
    }

    /// The bouquet being purchased. Immutable for the draft's lifetime.
    #[must_use]
    pub const fn bouquet(&self) -> &Bouquet {
        &self.bouquet
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected add-on IDs, always a subset of the catalog.
    #[must_use]
    pub const fn selected_add_ons(&self) -> &BTreeSet<AddOnId> {
        &self.selected_add_ons
    }

    #[must_use]
    pub fn has_add_on(&self, id: AddOnId) -> bool {
        self.selected_add_ons.contains(&id)
    }
}

/// Whether advancing out of `step` is permitted for the current draft.
///
/// Pure predicate; callers surface the refusal however they like.
#[must_use]
pub fn can_advance(step: CheckoutStep, draft: &OrderDraft) -> bool {
    match step {
        CheckoutStep::Fulfillment => draft.fulfillment != Fulfillment::Unselected,
        CheckoutStep::Address => {
            draft.fulfillment == Fulfillment::Pickup || draft.address.is_complete()
        }
        CheckoutStep::AddOns => true,
        CheckoutStep::Payment => draft.identity == Identity::Guest || draft.payment.is_complete(),
    }
}

/// Order total in cents: `(bouquet price + selected add-on prices) * quantity`.
///
/// Always recomputed from the draft; never stored where it could desync.
/// Add-on IDs missing from the catalog contribute nothing.
#[must_use]
pub fn compute_total(draft: &OrderDraft, catalog: &Catalog) -> i64 {
    let add_ons_total: i64 = draft
        .selected_add_ons
        .iter()
        .filter_map(|id| catalog.find_add_on(*id))
        .map(|a| a.price_cents)
        .sum();
    (draft.bouquet.price_cents + add_ons_total) * i64::from(draft.quantity)
}

/// Errors raised by checkout completion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("checkout blocked: step '{step}' validation failed")]
    ValidationBlocked { step: CheckoutStep },
    #[error("checkout already completed")]
    AlreadyCompleted,
}

/// Result of an [`CheckoutWizard::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// The gate passed and the wizard moved to this step.
    Moved(CheckoutStep),
    /// The gate refused; the step is unchanged.
    Blocked(CheckoutStep),
    /// The final gate passed; the order is finalized and the wizard consumed.
    Completed(Order),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum CheckoutPhase {
    #[default]
    InProgress,
    Completed,
}

/// The checkout wizard: owns the draft and the current step, and is the
/// only thing that mutates either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    phase: CheckoutPhase,
    draft: OrderDraft,
}

impl CheckoutWizard {
    /// Open a checkout for the given bouquet. Quantity is floored at 1.
    #[must_use]
    pub fn new(bouquet: Bouquet, quantity: u32) -> Self {
        Self {
            step: CheckoutStep::FIRST,
            phase: CheckoutPhase::InProgress,
            draft: OrderDraft::new(bouquet, quantity),
        }
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Whether the wizard has produced its order and is now inert.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == CheckoutPhase::Completed
    }

    /// Whether the current step's gate would let [`Self::advance`] through.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_completed() && can_advance(self.step, &self.draft)
    }

    /// Current order total in cents for the draft as it stands.
    #[must_use]
    pub fn total_cents(&self, catalog: &Catalog) -> i64 {
        compute_total(&self.draft, catalog)
    }

    /// Try to move to the next step. At the last step this finalizes the
    /// order instead. A consumed wizard always reports `Blocked`.
    pub fn advance(&mut self, catalog: &Catalog) -> AdvanceOutcome {
        if self.is_completed() || !can_advance(self.step, &self.draft) {
            return AdvanceOutcome::Blocked(self.step);
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                AdvanceOutcome::Moved(next)
            }
            None => match self.complete(catalog) {
                Ok(order) => AdvanceOutcome::Completed(order),
                Err(_) => AdvanceOutcome::Blocked(self.step),
            },
        }
    }

    /// Move back one step. Never re-validates; a no-op at the first step
    /// and on a consumed wizard.
    pub fn retreat(&mut self) -> CheckoutStep {
        if !self.is_completed() {
            if let Some(prev) = self.step.prev() {
                self.step = prev;
            }
        }
        self.step
    }

    /// Finalize the order. Only permitted at the last step with a passing
    /// gate; on success the wizard is consumed and refuses further changes.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::ValidationBlocked`] if the wizard is not at
    /// the last step or the final gate fails, and
    /// [`CheckoutError::AlreadyCompleted`] if the order was already placed.
    pub fn complete(&mut self, catalog: &Catalog) -> Result<Order, CheckoutError> {
        if self.is_completed() {
            return Err(CheckoutError::AlreadyCompleted);
        }
        if self.step != CheckoutStep::LAST || !can_advance(self.step, &self.draft) {
            return Err(CheckoutError::ValidationBlocked { step: self.step });
        }
        let address = match self.draft.fulfillment {
            Fulfillment::Delivery => Some(self.draft.address.clone()),
            Fulfillment::Pickup | Fulfillment::Unselected => None,
        };
        let order = Order {
            bouquet_id: self.draft.bouquet.id,
            bouquet_name: self.draft.bouquet.name.clone(),
            unit_price_cents: self.draft.bouquet.price_cents,
            quantity: self.draft.quantity,
            fulfillment: self.draft.fulfillment,
            address,
            add_ons: self.draft.selected_add_ons.iter().copied().collect(),
            identity: self.draft.identity,
            total_cents: compute_total(&self.draft, catalog),
            placed_at: Utc::now(),
        };
        self.phase = CheckoutPhase::Completed;
        Ok(order)
    }

    /// Flip membership of an add-on. Unknown IDs are a silent no-op so the
    /// caller can hold stale references without crashing the flow.
    pub fn toggle_add_on(&mut self, id: AddOnId, catalog: &Catalog) {
        if self.is_completed() || !catalog.has_add_on(id) {
            return;
        }
        if !self.draft.selected_add_ons.remove(&id) {
            self.draft.selected_add_ons.insert(id);
        }
    }

    /// Set the quantity, floored at 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        if !self.is_completed() {
            self.draft.quantity = quantity.max(1);
        }
    }

    pub fn increment_quantity(&mut self) {
        if !self.is_completed() {
            self.draft.quantity = self.draft.quantity.saturating_add(1);
        }
    }

    /// Decrement the quantity; a no-op at 1.
    pub fn decrement_quantity(&mut self) {
        if !self.is_completed() && self.draft.quantity > 1 {
            self.draft.quantity -= 1;
        }
    }

    pub fn set_fulfillment(&mut self, fulfillment: Fulfillment) {
        if !self.is_completed() {
            self.draft.fulfillment = fulfillment;
        }
    }

    pub fn set_street(&mut self, value: impl Into<String>) {
        if !self.is_completed() {
            self.draft.address.street = value.into();
        }
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        if !self.is_completed() {
            self.draft.address.city = value.into();
        }
    }

    pub fn set_postal_code(&mut self, value: impl Into<String>) {
        if !self.is_completed() {
            self.draft.address.postal_code = value.into();
        }
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        if !self.is_completed() {
            self.draft.address.phone = value.into();
        }
    }

    pub fn set_identity(&mut self, identity: Identity) {
        if !self.is_completed() {
            self.draft.identity = identity;
        }
    }

    /// Replace the card details. Retained but ignored while the identity is
    /// `Guest`, matching the permissive write rule for off-step fields.
    pub fn set_payment(&mut self, payment: PaymentInfo) {
        if !self.is_completed() {
            self.draft.payment = payment;
        }
    }
}
