use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::MotionResult;

use super::config_validation::validate_form_submit_config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmitConfig {
    pub sending_duration_ms: f64,
    pub sent_duration_ms: f64,
    /// Delay after the success state before the enclosing modal closes.
    pub modal_hide_delay_ms: f64,
}

impl Default for FormSubmitConfig {
    fn default() -> Self {
        Self {
            sending_duration_ms: 2000.0,
            sent_duration_ms: 3000.0,
            modal_hide_delay_ms: 1500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FormPhase {
    Idle,
    Sending { since_ms: f64 },
    Sent { since_ms: f64 },
}

/// UI effects the host applies to the form and its submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEffect {
    /// Spinner label, button disabled.
    ShowSending,
    /// Success label and style.
    ShowSent,
    ResetForm,
    HideModal,
    /// Original label, button enabled.
    RestoreButton,
}

pub type FormEffects = SmallVec<[FormEffect; 4]>;

/// Simulated submission feedback for contact forms. Nothing is sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSubmitFlow {
    config: FormSubmitConfig,
    phase: FormPhase,
    in_modal: bool,
    modal_hide_pending: bool,
}

impl FormSubmitFlow {
    pub fn new(config: FormSubmitConfig) -> MotionResult<Self> {
        validate_form_submit_config(config)?;
        Ok(Self {
            config,
            phase: FormPhase::Idle,
            in_modal: false,
            modal_hide_pending: false,
        })
    }

    /// Marks the form as living inside a dismissible modal.
    #[must_use]
    pub fn in_modal(mut self, in_modal: bool) -> Self {
        self.in_modal = in_modal;
        self
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Starts a submission. Ignored unless the flow is idle.
    pub fn submit(&mut self, now_ms: f64) -> FormEffects {
        let mut effects = FormEffects::new();
        if self.phase != FormPhase::Idle {
            debug!(phase = ?self.phase, "submit ignored while busy");
            return effects;
        }
        self.phase = FormPhase::Sending { since_ms: now_ms };
        effects.push(FormEffect::ShowSending);
        effects
    }

    /// Advances timers, returning the effects that became due in order.
    pub fn poll(&mut self, now_ms: f64) -> FormEffects {
        let mut effects = FormEffects::new();
        if let FormPhase::Sending { since_ms } = self.phase {
            let sent_at = since_ms + self.config.sending_duration_ms;
            if now_ms >= sent_at {
                self.phase = FormPhase::Sent { since_ms: sent_at };
                self.modal_hide_pending = self.in_modal;
                effects.push(FormEffect::ShowSent);
                effects.push(FormEffect::ResetForm);
                debug!("form submission marked as sent");
            }
        }
        if let FormPhase::Sent { since_ms } = self.phase {
            if self.modal_hide_pending && now_ms >= since_ms + self.config.modal_hide_delay_ms {
                self.modal_hide_pending = false;
                effects.push(FormEffect::HideModal);
            }
            if now_ms >= since_ms + self.config.sent_duration_ms {
                if self.modal_hide_pending {
                    self.modal_hide_pending = false;
                    effects.push(FormEffect::HideModal);
                }
                self.phase = FormPhase::Idle;
                effects.push(FormEffect::RestoreButton);
            }
        }
        effects
    }
}
