use folio_motion::api::{FormEffect, FormPhase, FormSubmitConfig, FormSubmitFlow};

fn flow(in_modal: bool) -> FormSubmitFlow {
    FormSubmitFlow::new(FormSubmitConfig::default())
        .expect("flow")
        .in_modal(in_modal)
}

#[test]
fn submit_walks_through_sending_and_sent() {
    let mut flow = flow(true);
    assert_eq!(flow.submit(0.0).as_slice(), &[FormEffect::ShowSending]);
    assert_eq!(flow.phase(), FormPhase::Sending { since_ms: 0.0 });

    assert!(flow.poll(1999.0).is_empty());
    assert_eq!(
        flow.poll(2000.0).as_slice(),
        &[FormEffect::ShowSent, FormEffect::ResetForm]
    );
    assert_eq!(flow.phase(), FormPhase::Sent { since_ms: 2000.0 });

    assert!(flow.poll(3499.0).is_empty());
    assert_eq!(flow.poll(3500.0).as_slice(), &[FormEffect::HideModal]);
    assert_eq!(flow.poll(5000.0).as_slice(), &[FormEffect::RestoreButton]);
    assert_eq!(flow.phase(), FormPhase::Idle);
}

#[test]
fn resubmitting_while_busy_is_ignored() {
    let mut flow = flow(false);
    flow.submit(0.0);
    assert!(flow.submit(100.0).is_empty());
    assert_eq!(flow.phase(), FormPhase::Sending { since_ms: 0.0 });
}

#[test]
fn late_poll_emits_every_due_effect_in_order() {
    let mut flow = flow(true);
    flow.submit(0.0);
    assert_eq!(
        flow.poll(60_000.0).as_slice(),
        &[
            FormEffect::ShowSent,
            FormEffect::ResetForm,
            FormEffect::HideModal,
            FormEffect::RestoreButton,
        ]
    );
    assert_eq!(flow.phase(), FormPhase::Idle);
}

#[test]
fn forms_outside_a_modal_never_hide_it() {
    let mut flow = flow(false);
    flow.submit(0.0);
    let effects: Vec<_> = [2000.0, 3500.0, 5000.0]
        .into_iter()
        .flat_map(|now| flow.poll(now))
        .collect();
    assert!(!effects.contains(&FormEffect::HideModal));
    assert_eq!(effects.last(), Some(&FormEffect::RestoreButton));
}

#[test]
fn negative_durations_are_rejected() {
    let config = FormSubmitConfig {
        sent_duration_ms: -5.0,
        ..FormSubmitConfig::default()
    };
    assert!(FormSubmitFlow::new(config).is_err());
}
