//! Grid supply point reference data.
//!
//! The fourteen regional distribution areas are fixed by the industry, so the
//! table is compiled in rather than fetched.

use serde::Serialize;

/// A regional grid supply point (GSP)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSupplyPoint {
    /// Distributor id (10..=23)
    pub id: u32,
    /// Region name
    pub name: &'static str,
    /// Distribution network operator
    pub operator: &'static str,
    /// Operator phone number
    pub phone_number: &'static str,
    /// MPAS participant id
    pub participant_id: &'static str,
    /// GSP group id, the key the service reports (e.g. "_A")
    pub group_id: &'static str,
}

/// Grid supply points of the UK distribution regions
// https://en.wikipedia.org/wiki/Meter_Point_Administration_Number#Distributor_ID
pub const GRID_SUPPLY_POINTS: [GridSupplyPoint; 14] = [
    GridSupplyPoint {
        id: 10,
        name: "Eastern England",
        operator: "UK Power Networks",
        phone_number: "0800 029 4285",
        participant_id: "EELC",
        group_id: "_A",
    },
    GridSupplyPoint {
        id: 11,
        name: "East Midlands",
        operator: "Western Power Distribution",
        phone_number: "0800 096 3080",
        participant_id: "EMEB",
        group_id: "_B",
    },
    GridSupplyPoint {
        id: 12,
        name: "London",
        operator: "UK Power Networks",
        phone_number: "0800 029 4285",
        participant_id: "LOND",
        group_id: "_C",
    },
    GridSupplyPoint {
        id: 13,
        name: "Merseyside and Northern Wales",
        operator: "SP Energy Networks",
        phone_number: "0330 10 10 444",
        participant_id: "MANW",
        group_id: "_D",
    },
    GridSupplyPoint {
        id: 14,
        name: "West Midlands",
        operator: "Western Power Distribution",
        phone_number: "0800 096 3080",
        participant_id: "MIDE",
        group_id: "_E",
    },
    GridSupplyPoint {
        id: 15,
        name: "North Eastern England",
        operator: "Northern Powergrid",
        phone_number: "0800 011 3332",
        participant_id: "NEEB",
        group_id: "_F",
    },
    GridSupplyPoint {
        id: 16,
        name: "North Western England",
        operator: "Electricity North West",
        phone_number: "0800 048 1820",
        participant_id: "NORW",
        group_id: "_G",
    },
    GridSupplyPoint {
        id: 17,
        name: "Northern Scotland",
        operator: "Scottish & Southern Electricity Networks",
        phone_number: "0800 048 3516",
        participant_id: "HYDE",
        group_id: "_P",
    },
    GridSupplyPoint {
        id: 18,
        name: "Southern Scotland",
        operator: "SP Energy Networks",
        phone_number: "0330 10 10 444",
        participant_id: "SPOW",
        group_id: "_N",
    },
    GridSupplyPoint {
        id: 19,
        name: "South Eastern England",
        operator: "UK Power Networks",
        phone_number: "0800 029 4285",
        participant_id: "SEEB",
        group_id: "_J",
    },
    GridSupplyPoint {
        id: 20,
        name: "Southern England",
        operator: "Scottish & Southern Electricity Networks",
        phone_number: "0800 048 3516",
        participant_id: "SOUT",
        group_id: "_H",
    },
    GridSupplyPoint {
        id: 21,
        name: "Southern Wales",
        operator: "Western Power Distribution",
        phone_number: "0800 096 3080",
        participant_id: "SWAE",
        group_id: "_K",
    },
    GridSupplyPoint {
        id: 22,
        name: "South Western England",
        operator: "Western Power Distribution",
        phone_number: "0800 096 3080",
        participant_id: "SWEB",
        group_id: "_L",
    },
    GridSupplyPoint {
        id: 23,
        name: "Yorkshire",
        operator: "Northern Powergrid",
        phone_number: "0800 011 3332",
        participant_id: "YELG",
        group_id: "_M",
    },
];

impl GridSupplyPoint {
    /// Look up a grid supply point by its group id (exact match)
    pub fn by_group_id(group_id: &str) -> Option<GridSupplyPoint> {
        GRID_SUPPLY_POINTS
            .iter()
            .find(|gsp| gsp.group_id == group_id)
            .copied()
    }
}
