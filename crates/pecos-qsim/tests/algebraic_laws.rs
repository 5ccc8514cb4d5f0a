use pecos_qsim::prelude::*;

fn fresh(num_qubits: usize) -> StdSparseStab {
    StdSparseStab::new(num_qubits)
}

/// Applies `gate` twice and checks the qubit is back in a deterministic
/// computational-zero state, i.e. the gate squares to the identity.
fn assert_involution(gate: impl Fn(&mut StdSparseStab, usize)) {
    let mut sim = fresh(1);
    gate(&mut sim, 0);
    gate(&mut sim, 0);
    let result = sim.mz(0);
    assert!(result.is_deterministic);
    assert!(!result.outcome);
}

#[test]
fn h_squared_is_identity() {
    assert_involution(|sim, q| {
        sim.h(q);
    });
}

#[test]
fn x_squared_is_identity() {
    assert_involution(|sim, q| {
        sim.x(q);
    });
}

#[test]
fn z_squared_is_identity() {
    assert_involution(|sim, q| {
        sim.z(q);
    });
}

#[test]
fn y_squared_is_identity() {
    assert_involution(|sim, q| {
        sim.y(q);
    });
}

#[test]
fn s_squared_equals_z() {
    let mut lhs = fresh(1);
    lhs.x(0); // move off |0> so S^2 = Z is observable
    lhs.sz(0).sz(0);
    let mut rhs = fresh(1);
    rhs.x(0);
    rhs.z(0);
    assert_eq!(lhs.mz(0).outcome, rhs.mz(0).outcome);
}

#[test]
fn s_then_sdg_is_identity() {
    let mut sim = fresh(1);
    sim.x(0);
    sim.sz(0).szdg(0);
    let result = sim.mz(0);
    assert!(result.is_deterministic);
    assert!(result.outcome);
}

#[test]
fn sx_squared_equals_x() {
    let mut lhs = fresh(1);
    lhs.h(0); // move to an eigenstate where X is observable after measuring in the X basis
    lhs.sx(0).sx(0);
    let mut rhs = fresh(1);
    rhs.h(0);
    rhs.x(0);
    assert_eq!(lhs.mx(0).outcome, rhs.mx(0).outcome);
}

#[test]
fn h_z_h_equals_x() {
    let mut lhs = fresh(1);
    lhs.h(0).z(0).h(0);
    let mut rhs = fresh(1);
    rhs.x(0);
    assert_eq!(lhs.mz(0).outcome, rhs.mz(0).outcome);
}

#[test]
fn sz_x_szdg_equals_y() {
    let mut lhs = fresh(1);
    lhs.h(0);
    lhs.sz(0).x(0).szdg(0);
    let mut rhs = fresh(1);
    rhs.h(0);
    rhs.y(0);
    assert_eq!(lhs.my(0).outcome, rhs.my(0).outcome);
}

#[test]
fn cx_squared_is_identity() {
    let mut sim = fresh(2);
    sim.x(0);
    sim.cx(0, 1).cx(0, 1);
    assert!(sim.mz(0).outcome);
    assert!(!sim.mz(1).outcome);
}

#[test]
fn swap_squared_is_identity() {
    let mut sim = fresh(2);
    sim.x(0);
    sim.swap(0, 1).swap(0, 1);
    assert!(sim.mz(0).outcome);
    assert!(!sim.mz(1).outcome);
}

#[test]
fn h_x_h_equals_z_so_measurement_on_zero_state_is_deterministic_zero() {
    let mut sim = fresh(1);
    sim.h(0).x(0).h(0);
    let result = sim.mz(0);
    assert!(result.is_deterministic);
    assert!(!result.outcome);
}

#[test]
fn h_then_measure_on_zero_state_is_nondeterministic() {
    let mut sim = fresh(1);
    sim.h(0);
    let result = sim.mz(0);
    assert!(!result.is_deterministic);
}
