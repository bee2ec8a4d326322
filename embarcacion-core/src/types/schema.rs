use serde::{Deserialize, Serialize};

/// Editable fields of a vessel record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VesselField {
    Name,
    Capacity,
    Description,
    ScheduledDate,
}

impl VesselField {
    /// Field name as used by the resource service.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::Capacity => "capacidad",
            Self::Description => "descripcion",
            Self::ScheduledDate => "fecha",
        }
    }
}

impl std::fmt::Display for VesselField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Record revision.
///
/// `V2` extends `V1` with a required scheduled date; everything else is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSchema {
    #[default]
    V1,
    V2,
}

const V1_FIELDS: &[VesselField] = &[
    VesselField::Name,
    VesselField::Capacity,
    VesselField::Description,
];

const V2_FIELDS: &[VesselField] = &[
    VesselField::Name,
    VesselField::Capacity,
    VesselField::Description,
    VesselField::ScheduledDate,
];

impl RecordSchema {
    /// Fields present in this revision, in form order.
    #[must_use]
    pub fn fields(self) -> &'static [VesselField] {
        match self {
            Self::V1 => V1_FIELDS,
            Self::V2 => V2_FIELDS,
        }
    }

    #[must_use]
    pub fn has_field(self, field: VesselField) -> bool {
        self.fields().contains(&field)
    }

    #[must_use]
    pub fn has_scheduled_date(self) -> bool {
        self.has_field(VesselField::ScheduledDate)
    }
}
