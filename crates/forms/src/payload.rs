//! Flat submission payload for `POST /api/formularios/crear/`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Grid-style per-row selections keyed by row label.
pub type GridSelection = Map<String, Value>;

/// The backend's flat inspection record.
///
/// Field names are the wire names the backend expects; a handful are
/// camelCase because that is what the endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionForm {
    // Page 1: visit header
    pub tecnico: Option<i64>,
    pub obra: String,
    /// Visit date, normalized to `YYYY-MM-DD` (empty when absent/unparseable).
    pub fecha: String,
    pub motivo_de_visita: String,
    pub otro_motivo: String,

    // Page 2: site logistics and participation
    pub logistica_de_obra: String,
    pub logistica_de_obra_observaciones: String,
    pub participante_jornal_ambiental: String,
    pub participante_operario: String,
    pub participante_oficina_tecnica: String,
    pub participante_observaciones: String,
    pub limpieza_general_en_terreno: String,
    pub limpieza_general_en_pisos: String,
    pub limpieza_general_observaciones: String,

    // Page 3: main clean point
    pub punto_limpio: String,
    pub punto_limpio_ubicacion: String,
    pub punto_limpio_estructura: String,
    pub punto_limpio_tipo_contenedor: String,
    pub punto_limpio_estado_contenedor: String,
    pub punto_limpio_senaletica: String,
    pub punto_limpio_observaciones: String,

    // Page 4: per-floor clean points
    pub puntos_limpios_por_pisos: String,
    #[serde(rename = "grillaPuntosLimpiosPisos")]
    pub grilla_puntos_limpios_pisos: GridSelection,
    pub punto_limpio_edificio_observaciones: String,

    // Page 5: container staging
    #[serde(rename = "acopioContenedores")]
    pub acopio_contenedores: String,
    pub grilla: GridSelection,
    pub observaciones: String,

    // Page 6: actions taken
    pub acciones_tomadas: String,
    pub otras_observaciones: String,

    // Pages 7-11: per-material sections
    pub escombro_limpio: String,
    pub escombro_checks: Vec<String>,
    pub escombro_otro_texto: String,
    pub escombro_observaciones: String,

    pub plastico: String,
    pub plastico_opciones: Vec<String>,
    pub plastico_otro: String,
    pub plastico_observaciones: String,

    pub papel_y_carton: String,
    pub papel_carton_opciones: Vec<String>,
    pub papel_carton_otro: String,
    pub papel_carton_observaciones: String,

    pub metales: String,
    pub metales_opciones: Vec<String>,
    pub metales_otro_texto: String,
    pub metales_observaciones: String,

    pub madera: String,
    pub madera_opciones: Vec<String>,
    pub madera_otro: String,
    pub madera_observaciones: String,

    // Page 12: mixed waste
    pub mezclados: String,
    #[serde(rename = "gridSelection")]
    pub grid_selection: GridSelection,
    pub mezclados_opciones: Vec<String>,
    pub mezclados_otro: String,
    pub mezclados_observaciones: String,

    // Page 13: staging point
    #[serde(rename = "puntoAcopio")]
    pub punto_acopio: String,
    #[serde(rename = "puntoAcopioGrid")]
    pub punto_acopio_grid: Vec<Value>,
    #[serde(rename = "puntoAcopioOpciones")]
    pub punto_acopio_opciones: Vec<String>,
    #[serde(rename = "puntoAcopioOtro")]
    pub punto_acopio_otro: String,
    #[serde(rename = "puntoAcopioObservaciones")]
    pub punto_acopio_observaciones: String,
}

/// A required cross-page field is missing; submission must not happen.
///
/// Checked post-transform, in this order, so the user sees the most
/// actionable message first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("no technician selected; review the form data")]
    MissingTecnico,

    #[error("visit date and visit reason are required")]
    MissingFechaOrMotivo,

    #[error("no obra selected; review the form data")]
    MissingObra,
}

impl InspectionForm {
    /// Post-transform precondition check. No network call may be made when
    /// this fails.
    pub fn validate(&self) -> Result<(), SubmitBlocked> {
        // A zero id is a select box that never got a real selection.
        if self.tecnico.is_none_or(|id| id == 0) {
            return Err(SubmitBlocked::MissingTecnico);
        }
        if self.fecha.trim().is_empty() || self.motivo_de_visita.trim().is_empty() {
            return Err(SubmitBlocked::MissingFechaOrMotivo);
        }
        if self.obra.is_empty() {
            return Err(SubmitBlocked::MissingObra);
        }
        Ok(())
    }
}
