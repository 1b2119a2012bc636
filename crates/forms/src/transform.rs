//! Flatten-and-transform: page slices in, flat submission record out.
//!
//! Every mapping here (renames, joins, defaults, the clean-point grid
//! extraction) is part of the backend contract; defaults such as
//! `"No Aplica"` are what the endpoint stores for untouched sections.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::payload::{GridSelection, InspectionForm};
use crate::store::{FormStore, PageValues};

/// Read every page's slice and assemble the flat record.
///
/// Total: absent slices and absent fields resolve to each field's
/// placeholder, so the result is always well-formed. Whether it is
/// submittable is [`InspectionForm::validate`]'s call.
pub fn flatten(store: &FormStore) -> InspectionForm {
    let page = |i: usize| store.slice_or_empty(&FormStore::page_key(i));

    let page1 = page(0);
    let page2 = page(1);
    let page3 = page(2);
    let page4 = page(3);
    let page5 = page(4);
    let page6 = page(5);
    let page7 = page(6);
    let page8 = page(7);
    let page9 = page(8);
    let page10 = page(9);
    let page11 = page(10);
    let page12 = page(11);
    let page13 = page(12);

    // Clean-point grid: positional rows, only meaningful when the selector
    // says a clean point exists.
    let has_clean_point = text(&page3, "puntoLimpioSelect").as_deref() == Some("Hay");
    let clean_point_grid = array(&page3, "grillaPuntosLimpios");
    let grid_row = |i: usize| -> String {
        if !has_clean_point {
            return String::new();
        }
        clean_point_grid
            .get(i)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string()
    };

    InspectionForm {
        tecnico: integer(&page1, "tecnico"),
        obra: text(&page1, "obraId")
            .or_else(|| text(&page1, "obra"))
            .unwrap_or_default(),
        fecha: text(&page1, "fecha").map(normalize_date).unwrap_or_default(),
        motivo_de_visita: joined(&page1, "motivos"),
        otro_motivo: text_or(&page1, "otroMotivo", ""),

        logistica_de_obra: text_or(&page2, "logistica", ""),
        logistica_de_obra_observaciones: text_or(&page2, "logisticaObservaciones", ""),
        participante_jornal_ambiental: nested_text(&page2, "participacion", "Jornal Ambiental"),
        participante_operario: nested_text(&page2, "participacion", "Operarios"),
        participante_oficina_tecnica: nested_text(
            &page2,
            "participacion",
            "Oficina Técnica (jefe de obra, capataz, etc.)",
        ),
        participante_observaciones: text_or(&page2, "participantesObservaciones", ""),
        limpieza_general_en_terreno: nested_text(&page2, "limpieza", "En terreno"),
        limpieza_general_en_pisos: nested_text(&page2, "limpieza", "Por pisos"),
        limpieza_general_observaciones: text_or(&page2, "limpiezaObservaciones", ""),

        punto_limpio: text_or(&page3, "puntoLimpioSelect", "No Hay"),
        punto_limpio_ubicacion: grid_row(0),
        punto_limpio_estructura: grid_row(1),
        punto_limpio_tipo_contenedor: grid_row(2),
        punto_limpio_estado_contenedor: grid_row(3),
        punto_limpio_senaletica: grid_row(4),
        punto_limpio_observaciones: if has_clean_point {
            text_or(&page3, "puntoLimpioObservaciones", "")
        } else {
            String::new()
        },

        puntos_limpios_por_pisos: text_or(&page4, "puntosLimpiosEdificio", "No hay"),
        grilla_puntos_limpios_pisos: object(&page4, "grillaPuntosLimpiosPisos"),
        punto_limpio_edificio_observaciones: text_or(&page4, "puntosLimpiosEdificioObservaciones", ""),

        acopio_contenedores: text_or(&page5, "acopioContenedores", ""),
        grilla: object(&page5, "grilla"),
        observaciones: text_or(&page5, "observaciones", ""),

        acciones_tomadas: text_or(&page6, "accionesTomadas", ""),
        otras_observaciones: text_or(&page6, "otrasObservaciones", ""),

        escombro_limpio: text_or(&page7, "escombro", "No Aplica"),
        escombro_checks: string_list(&page7, "escombroChecks"),
        escombro_otro_texto: text_or(&page7, "escombroOtroTexto", ""),
        escombro_observaciones: text_or(&page7, "escombroObservaciones", ""),

        plastico: text_or(&page8, "plastico", "No Aplica"),
        plastico_opciones: string_list(&page8, "plasticoOpciones"),
        plastico_otro: text_or(&page8, "plasticoOtro", ""),
        plastico_observaciones: text_or(&page8, "plasticoObservaciones", ""),

        papel_y_carton: text_or(&page9, "papelCarton", "No Aplica"),
        papel_carton_opciones: string_list(&page9, "papelCartonOpciones"),
        papel_carton_otro: text_or(&page9, "papelCartonOtro", ""),
        papel_carton_observaciones: text_or(&page9, "papelCartonObservaciones", ""),

        metales: text_or(&page10, "metales", "No Aplica"),
        metales_opciones: string_list(&page10, "metalesOpciones"),
        metales_otro_texto: text_or(&page10, "metalesOtroTexto", ""),
        metales_observaciones: text_or(&page10, "metalesObservaciones", ""),

        madera: text_or(&page11, "madera", "No Aplica"),
        madera_opciones: string_list(&page11, "maderaOpciones"),
        madera_otro: text_or(&page11, "maderaOtro", ""),
        madera_observaciones: text_or(&page11, "maderaObservaciones", ""),

        mezclados: text_or(&page12, "mezclados", "No Aplica"),
        grid_selection: object(&page12, "gridSelection"),
        mezclados_opciones: string_list(&page12, "mezcladosOpciones"),
        mezclados_otro: text_or(&page12, "mezcladosOtro", ""),
        mezclados_observaciones: text_or(&page12, "mezcladosObservaciones", ""),

        punto_acopio: text_or(&page13, "puntoAcopio", "No Aplica"),
        punto_acopio_grid: array(&page13, "puntoAcopioGrid"),
        punto_acopio_opciones: string_list(&page13, "puntoAcopioOpciones"),
        punto_acopio_otro: text_or(&page13, "puntoAcopioOtro", ""),
        punto_acopio_observaciones: text_or(&page13, "puntoAcopioObservaciones", "No hay"),
    }
}

/// Non-empty string at `key`, with numbers stringified.
fn text(slice: &PageValues, key: &str) -> Option<String> {
    match slice.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_or(slice: &PageValues, key: &str, default: &str) -> String {
    text(slice, key).unwrap_or_else(|| default.to_string())
}

/// String value inside a nested one-level object (grid row lookups).
fn nested_text(slice: &PageValues, key: &str, inner: &str) -> String {
    slice
        .get(key)
        .and_then(Value::as_object)
        .and_then(|obj| obj.get(inner))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Integer field that may arrive as a number or a numeric string.
fn integer(slice: &PageValues, key: &str) -> Option<i64> {
    match slice.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn array(slice: &PageValues, key: &str) -> Vec<Value> {
    slice
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn string_list(slice: &PageValues, key: &str) -> Vec<String> {
    array(slice, key)
        .into_iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

fn object(slice: &PageValues, key: &str) -> GridSelection {
    slice
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Multi-select joined with `", "`; a lone string passes through.
fn joined(slice: &PageValues, key: &str) -> String {
    match slice.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Normalize a date input to `YYYY-MM-DD`.
///
/// Accepts the plain form and RFC 3339 timestamps (what a date picker
/// serializes). Anything else becomes empty, which the precondition check
/// then rejects before any network call.
fn normalize_date(raw: String) -> String {
    if NaiveDate::parse_from_str(&raw, "%Y-%m-%d").is_ok() {
        return raw;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    tracing::warn!(raw, "unparseable visit date");
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(store: &mut FormStore, key: &str, v: serde_json::Value) {
        store.update(key, v.as_object().cloned().expect("object literal"));
    }

    #[test]
    fn empty_store_flattens_to_placeholders() {
        let form = flatten(&FormStore::new());
        assert_eq!(form.tecnico, None);
        assert_eq!(form.obra, "");
        assert_eq!(form.fecha, "");
        assert_eq!(form.punto_limpio, "No Hay");
        assert_eq!(form.puntos_limpios_por_pisos, "No hay");
        assert_eq!(form.escombro_limpio, "No Aplica");
        assert_eq!(form.plastico, "No Aplica");
        assert_eq!(form.papel_y_carton, "No Aplica");
        assert_eq!(form.metales, "No Aplica");
        assert_eq!(form.madera, "No Aplica");
        assert_eq!(form.mezclados, "No Aplica");
        assert_eq!(form.punto_acopio, "No Aplica");
        assert_eq!(form.punto_acopio_observaciones, "No hay");
        assert!(form.escombro_checks.is_empty());
        assert!(form.grilla.is_empty());
    }

    #[test]
    fn technician_id_parses_from_string_or_number() {
        let mut store = FormStore::new();
        set(&mut store, "page1", json!({"tecnico": "5"}));
        assert_eq!(flatten(&store).tecnico, Some(5));

        set(&mut store, "page1", json!({"tecnico": 7}));
        assert_eq!(flatten(&store).tecnico, Some(7));

        set(&mut store, "page1", json!({"tecnico": "not-a-number"}));
        assert_eq!(flatten(&store).tecnico, None);
    }

    #[test]
    fn obra_prefers_the_id_field() {
        let mut store = FormStore::new();
        set(&mut store, "page1", json!({"obraId": "9", "obra": "Torre Norte"}));
        assert_eq!(flatten(&store).obra, "9");

        let mut store = FormStore::new();
        set(&mut store, "page1", json!({"obra": "Torre Norte"}));
        assert_eq!(flatten(&store).obra, "Torre Norte");
    }

    #[test]
    fn visit_reasons_join_with_comma_space() {
        let mut store = FormStore::new();
        set(
            &mut store,
            "page1",
            json!({"motivos": ["Reunión", "Capacitación Inicial"]}),
        );
        assert_eq!(
            flatten(&store).motivo_de_visita,
            "Reunión, Capacitación Inicial"
        );
    }

    #[test]
    fn dates_normalize_to_ymd() {
        let mut store = FormStore::new();
        set(&mut store, "page1", json!({"fecha": "2024-01-01"}));
        assert_eq!(flatten(&store).fecha, "2024-01-01");

        set(&mut store, "page1", json!({"fecha": "2024-03-15T10:30:00.000Z"}));
        assert_eq!(flatten(&store).fecha, "2024-03-15");

        set(&mut store, "page1", json!({"fecha": "yesterday"}));
        assert_eq!(flatten(&store).fecha, "");
    }

    #[test]
    fn clean_point_grid_is_extracted_only_when_present() {
        let mut store = FormStore::new();
        set(
            &mut store,
            "page3",
            json!({
                "puntoLimpioSelect": "Hay",
                "grillaPuntosLimpios": ["Planta baja", "Cerrada", "Volqueta", "Bueno", "Sí"],
                "puntoLimpioObservaciones": "ok"
            }),
        );
        let form = flatten(&store);
        assert_eq!(form.punto_limpio, "Hay");
        assert_eq!(form.punto_limpio_ubicacion, "Planta baja");
        assert_eq!(form.punto_limpio_senaletica, "Sí");
        assert_eq!(form.punto_limpio_observaciones, "ok");

        set(&mut store, "page3", json!({"puntoLimpioSelect": "No Hay"}));
        let form = flatten(&store);
        assert_eq!(form.punto_limpio, "No Hay");
        // Grid rows and observations are suppressed when there is no clean point.
        assert_eq!(form.punto_limpio_ubicacion, "");
        assert_eq!(form.punto_limpio_observaciones, "");
    }

    #[test]
    fn participation_rows_read_from_the_nested_object() {
        let mut store = FormStore::new();
        set(
            &mut store,
            "page2",
            json!({
                "participacion": {
                    "Jornal Ambiental": "Sí",
                    "Operarios": "Parcial",
                    "Oficina Técnica (jefe de obra, capataz, etc.)": "No"
                }
            }),
        );
        let form = flatten(&store);
        assert_eq!(form.participante_jornal_ambiental, "Sí");
        assert_eq!(form.participante_operario, "Parcial");
        assert_eq!(form.participante_oficina_tecnica, "No");
    }
}
