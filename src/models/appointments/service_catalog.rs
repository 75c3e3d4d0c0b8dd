// Suggested services offered in the booking form. Not enforced on create/update.
pub const SERVICIOS_SUGERIDOS: [&str; 8] = [
    "Mantenimiento general",
    "Cambio de aceite",
    "Revisión de frenos",
    "Reparación de motor",
    "Cambio de neumáticos",
    "Afinación",
    "Diagnóstico electrónico",
    "Otro",
];
