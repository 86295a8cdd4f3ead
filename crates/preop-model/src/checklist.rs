//! The inspection checklist catalog.
//!
//! Defined once at startup and immutable for the process lifetime. Item ids
//! are the ones printed on the corporate form; they are dense but not
//! contiguous across section boundaries.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One row of the printed checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u16,
    pub label: String,
}

/// An ordered group of checklist items under a section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

fn section(title: &str, items: &[(u16, &str)]) -> Section {
    Section {
        title: title.to_string(),
        items: items
            .iter()
            .map(|&(id, label)| ChecklistItem {
                id,
                label: label.to_string(),
            })
            .collect(),
    }
}

static CATALOG: LazyLock<Vec<Section>> = LazyLock::new(|| {
    vec![
        section(
            "A. DOCUMENTACIÓN",
            &[
                (1, "TARJETA DE PROPIEDAD"),
                (2, "LICENCIA DE CONDUCCIÓN"),
                (3, "SEGURO OBLIGATORIO"),
                (4, "SEGURO TODO RIESGO"),
                (5, "CERTIFICADO DE GASES"),
            ],
        ),
        section(
            "B. ESTADO GENERAL",
            &[
                (6, "LLANTAS"),
                (7, "DELANTERA IZQUIERDA"),
                (8, "TRASERA DERECHA"),
                (9, "TRASERA IZQUIERDA"),
                (10, "REPUESTO"),
            ],
        ),
        section(
            "C. ESTADO GENERAL DE LUCES",
            &[
                (11, "PRINCIPAL CARRETERA"),
                (12, "PRINCIPAL DE CRUCE"),
                (13, "ESTACIONARIAS"),
                (14, "DIRECCIONALES"),
                (15, "FRENO"),
                (16, "REVERSA"),
            ],
        ),
        section(
            "D. SISTEMA DE MOTOR",
            &[
                (17, "NIVEL ACEITE MOTOR"),
                (18, "REFRIGERANTE"),
                (19, "ACEITE HIDRAUICO"),
                (20, "LIQUIDO DE FRENOS"),
            ],
        ),
        section(
            "E. OTROS Y EQUIPO CARRETERAS",
            &[
                (21, "LIMPIABRISAS"),
                (22, "ESPEJOS"),
                (23, "PITO O BOCINA"),
                (24, "ALARMA DE REVERSA"),
                (25, "APOYA CABEZAS"),
                (26, "CINTURONES DE SEGURIDAD"),
                (27, "JIRO FARO"),
                (28, "CRUCETA"),
                (29, "TACOS"),
                (30, "HERRAMIENTA"),
                (31, "GATO"),
                (32, "LINTERNA"),
                (33, "CONOS"),
                (34, "CHALECO"),
                (35, "EXTINTOR"),
                (36, "BOTIQUÍN"),
                (37, "LOGOTIPOS"),
            ],
        ),
        section(
            "F. ELEMENTOS DE SEGURIDAD INDUSTRIAL",
            &[
                (38, "CASCO DE PROTECCIÓN"),
                (39, "CHALECO"),
                (40, "CALZADO INDUSTRIAL"),
                (41, "GUANTES"),
            ],
        ),
        section(
            "G. SISTEMA SUSPENSIÓN",
            &[
                (42, "RÓTULAS"),
                (43, "MUELLES"),
                (44, "AMORTIGUADORES"),
                (45, "RODAMIENTOS"),
                (46, "TERMINALES DIREC"),
                (47, "BARRA ESTABILIZ"),
            ],
        ),
        section(
            "H. SISTEMA DE FRENOS",
            &[
                (48, "EMERGENCIA"),
                (49, "PEDAL DE FRENO"),
                (50, "PASTILLA Y DISCO"),
                (51, "BANDAS"),
                (52, "DE PARQUEO"),
                (53, "BOMBA DE FRENO"),
                (54, "BOSTER"),
            ],
        ),
        section(
            "I. SISTEMA DE TRANSMISION",
            &[
                (55, "CRUCETAS"),
                (56, "RODAMIENTOS"),
                (57, "PEDAL DE EMBRAGUE"),
                (58, "ACEITE TRANSMISIÓN"),
                (59, "CADENA DE CARDAN"),
            ],
        ),
        section(
            "J. SISTEMA DE CARGA",
            &[
                (60, "VOLCO"),
                (61, "COMPUERTA"),
                (62, "COBERTURA DE MATERIAL"),
            ],
        ),
        section(
            "K. SISTEMA ELÉCTRICO",
            &[
                (63, "BATERÍA"),
                (64, "ALTERNADOR"),
                (65, "CABLEADO"),
                (66, "FUSIBLES"),
            ],
        ),
    ]
});

/// The full checklist catalog in form order.
pub fn catalog() -> &'static [Section] {
    &CATALOG
}

/// All item ids in form order.
pub fn item_ids() -> impl Iterator<Item = u16> {
    catalog().iter().flat_map(|s| s.items.iter().map(|i| i.id))
}

/// Look up an item label by id.
pub fn item_label(id: u16) -> Option<&'static str> {
    catalog()
        .iter()
        .flat_map(|s| s.items.iter())
        .find(|item| item.id == id)
        .map(|item| item.label.as_str())
}
