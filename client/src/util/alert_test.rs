#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn blocking_alert_is_callable_outside_browser() {
    blocking_alert("Por favor, preencha todos os campos obrigatórios corretamente.");
}
