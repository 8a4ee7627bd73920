//! Static catalogue of French départements (code + display name).
//!
//! The catalogue is the immutable base data every session starts from.
//! Codes are the official INSEE codes: 01–95 for metropolitan France
//! (with 2A/2B for Corsica instead of 20) plus the five overseas
//! départements.

/// An immutable catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

/// All 101 French départements.
pub const DEPARTEMENTS: &[Region] = &[
    Region { code: "01", name: "Ain" },
    Region { code: "02", name: "Aisne" },
    Region { code: "03", name: "Allier" },
    Region { code: "04", name: "Alpes-de-Haute-Provence" },
    Region { code: "05", name: "Hautes-Alpes" },
    Region { code: "06", name: "Alpes-Maritimes" },
    Region { code: "07", name: "Ardèche" },
    Region { code: "08", name: "Ardennes" },
    Region { code: "09", name: "Ariège" },
    Region { code: "10", name: "Aube" },
    Region { code: "11", name: "Aude" },
    Region { code: "12", name: "Aveyron" },
    Region { code: "13", name: "Bouches-du-Rhône" },
    Region { code: "14", name: "Calvados" },
    Region { code: "15", name: "Cantal" },
    Region { code: "16", name: "Charente" },
    Region { code: "17", name: "Charente-Maritime" },
    Region { code: "18", name: "Cher" },
    Region { code: "19", name: "Corrèze" },
    Region { code: "2A", name: "Corse-du-Sud" },
    Region { code: "2B", name: "Haute-Corse" },
    Region { code: "21", name: "Côte-d'Or" },
    Region { code: "22", name: "Côtes-d'Armor" },
    Region { code: "23", name: "Creuse" },
    Region { code: "24", name: "Dordogne" },
    Region { code: "25", name: "Doubs" },
    Region { code: "26", name: "Drôme" },
    Region { code: "27", name: "Eure" },
    Region { code: "28", name: "Eure-et-Loir" },
    Region { code: "29", name: "Finistère" },
    Region { code: "30", name: "Gard" },
    Region { code: "31", name: "Haute-Garonne" },
    Region { code: "32", name: "Gers" },
    Region { code: "33", name: "Gironde" },
    Region { code: "34", name: "Hérault" },
    Region { code: "35", name: "Ille-et-Vilaine" },
    Region { code: "36", name: "Indre" },
    Region { code: "37", name: "Indre-et-Loire" },
    Region { code: "38", name: "Isère" },
    Region { code: "39", name: "Jura" },
    Region { code: "40", name: "Landes" },
    Region { code: "41", name: "Loir-et-Cher" },
    Region { code: "42", name: "Loire" },
    Region { code: "43", name: "Haute-Loire" },
    Region { code: "44", name: "Loire-Atlantique" },
    Region { code: "45", name: "Loiret" },
    Region { code: "46", name: "Lot" },
    Region { code: "47", name: "Lot-et-Garonne" },
    Region { code: "48", name: "Lozère" },
    Region { code: "49", name: "Maine-et-Loire" },
    Region { code: "50", name: "Manche" },
    Region { code: "51", name: "Marne" },
    Region { code: "52", name: "Haute-Marne" },
    Region { code: "53", name: "Mayenne" },
    Region { code: "54", name: "Meurthe-et-Moselle" },
    Region { code: "55", name: "Meuse" },
    Region { code: "56", name: "Morbihan" },
    Region { code: "57", name: "Moselle" },
    Region { code: "58", name: "Nièvre" },
    Region { code: "59", name: "Nord" },
    Region { code: "60", name: "Oise" },
    Region { code: "61", name: "Orne" },
    Region { code: "62", name: "Pas-de-Calais" },
    Region { code: "63", name: "Puy-de-Dôme" },
    Region { code: "64", name: "Pyrénées-Atlantiques" },
    Region { code: "65", name: "Hautes-Pyrénées" },
    Region { code: "66", name: "Pyrénées-Orientales" },
    Region { code: "67", name: "Bas-Rhin" },
    Region { code: "68", name: "Haut-Rhin" },
    Region { code: "69", name: "Rhône" },
    Region { code: "70", name: "Haute-Saône" },
    Region { code: "71", name: "Saône-et-Loire" },
    Region { code: "72", name: "Sarthe" },
    Region { code: "73", name: "Savoie" },
    Region { code: "74", name: "Haute-Savoie" },
    Region { code: "75", name: "Paris" },
    Region { code: "76", name: "Seine-Maritime" },
    Region { code: "77", name: "Seine-et-Marne" },
    Region { code: "78", name: "Yvelines" },
    Region { code: "79", name: "Deux-Sèvres" },
    Region { code: "80", name: "Somme" },
    Region { code: "81", name: "Tarn" },
    Region { code: "82", name: "Tarn-et-Garonne" },
    Region { code: "83", name: "Var" },
    Region { code: "84", name: "Vaucluse" },
    Region { code: "85", name: "Vendée" },
    Region { code: "86", name: "Vienne" },
    Region { code: "87", name: "Haute-Vienne" },
    Region { code: "88", name: "Vosges" },
    Region { code: "89", name: "Yonne" },
    Region { code: "90", name: "Territoire de Belfort" },
    Region { code: "91", name: "Essonne" },
    Region { code: "92", name: "Hauts-de-Seine" },
    Region { code: "93", name: "Seine-Saint-Denis" },
    Region { code: "94", name: "Val-de-Marne" },
    Region { code: "95", name: "Val-d'Oise" },
    Region { code: "971", name: "Guadeloupe" },
    Region { code: "972", name: "Martinique" },
    Region { code: "973", name: "Guyane" },
    Region { code: "974", name: "La Réunion" },
    Region { code: "976", name: "Mayotte" },
];
