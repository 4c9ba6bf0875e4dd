//! Controladores por recurso
//!
//! Orquestan validación del payload, chequeos de existencia y el mapeo
//! de ausencias a los códigos HTTP documentados.

pub mod propietario_controller;
pub mod reporte_controller;
pub mod tipo_vehiculo_controller;
pub mod vehiculo_controller;
