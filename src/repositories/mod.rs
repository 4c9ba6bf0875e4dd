//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla; cada uno posee el pool y ejecuta SQL directo.

pub mod propietario_repository;
pub mod tipo_vehiculo_repository;
pub mod vehiculo_repository;
