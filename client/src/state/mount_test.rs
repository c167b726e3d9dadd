use super::*;

#[test]
fn default_phase_is_unmounted() {
    assert_eq!(MountPhase::default(), MountPhase::Unmounted);
    assert!(!MountPhase::Unmounted.renders_children());
}

#[test]
fn phases_advance_in_order() {
    let phase = MountPhase::Unmounted.begin();
    assert_eq!(phase, MountPhase::Mounting);
    assert!(!phase.renders_children());

    let phase = phase.complete();
    assert_eq!(phase, MountPhase::Mounted);
    assert!(phase.renders_children());
}

#[test]
fn complete_cannot_skip_mounting() {
    assert_eq!(MountPhase::Unmounted.complete(), MountPhase::Unmounted);
}

#[test]
fn transitions_never_move_backward() {
    for phase in [MountPhase::Unmounted, MountPhase::Mounting, MountPhase::Mounted] {
        assert!(phase.begin() >= phase);
        assert!(phase.complete() >= phase);
    }
    assert_eq!(MountPhase::Mounted.begin(), MountPhase::Mounted);
    assert_eq!(MountPhase::Mounted.complete(), MountPhase::Mounted);
}

#[test]
fn initial_phase_follows_build_target() {
    let expected = if cfg!(feature = "hydrate") { MountPhase::Mounting } else { MountPhase::Unmounted };
    assert_eq!(MountPhase::initial(), expected);
    assert!(!MountPhase::initial().renders_children());
}
