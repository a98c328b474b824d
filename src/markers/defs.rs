#[derive(Debug, Clone, Copy)]
pub struct MarkerDef {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: f64,
}

const BUILTIN_MARKERS: &[MarkerDef] = &[
    MarkerDef {
        id: "feature_politeness_==Gratitude==",
        label: "Gratitude",
        weight: 0.87,
    },
    MarkerDef {
        id: "feature_politeness_==Deference==",
        label: "Deference",
        weight: 0.78,
    },
    MarkerDef {
        id: "feature_politeness_==Indirect_(greeting)==",
        label: "Indirect (greeting)",
        weight: 0.43,
    },
    MarkerDef {
        id: "feature_politeness_==HASPOSITIVE==",
        label: "HASPOSITIVE",
        weight: 0.12,
    },
    MarkerDef {
        id: "feature_politeness_==HASNEGATIVE==",
        label: "HASNEGATIVE",
        weight: -0.13,
    },
    MarkerDef {
        id: "feature_politeness_==Apologizing==",
        label: "Apologizing",
        weight: 0.36,
    },
    MarkerDef {
        id: "feature_politeness_==Please==",
        label: "Please",
        weight: 0.49,
    },
    MarkerDef {
        id: "feature_politeness_==Please_start==",
        label: "Please start",
        weight: -0.30,
    },
    MarkerDef {
        id: "feature_politeness_==Indirect_(btw)==",
        label: "Indirect (btw)",
        weight: 0.63,
    },
    MarkerDef {
        id: "feature_politeness_==Direct_question==",
        label: "Direct question",
        weight: -0.27,
    },
    MarkerDef {
        id: "feature_politeness_==Direct_start==",
        label: "Direct start",
        weight: -0.43,
    },
    MarkerDef {
        id: "feature_politeness_==SUBJUNCTIVE==",
        label: "SUBJUNCTIVE",
        weight: 0.47,
    },
    MarkerDef {
        id: "feature_politeness_==INDICATIVE==",
        label: "INDICATIVE",
        weight: 0.09,
    },
    MarkerDef {
        id: "feature_politeness_==1st_person_start==",
        label: "1st person start",
        weight: 0.12,
    },
    MarkerDef {
        id: "feature_politeness_==1st_person==",
        label: "1st person",
        weight: 0.08,
    },
    MarkerDef {
        id: "feature_politeness_==2nd_person==",
        label: "2nd person",
        weight: 0.05,
    },
    MarkerDef {
        id: "feature_politeness_==2nd_person_start==",
        label: "2nd person start",
        weight: -0.30,
    },
    MarkerDef {
        id: "feature_politeness_==Hedges==",
        label: "Hedges",
        weight: 0.14,
    },
    MarkerDef {
        id: "feature_politeness_==Factuality==",
        label: "Factuality",
        weight: -0.38,
    },
];

pub fn builtin_markers() -> &'static [MarkerDef] {
    BUILTIN_MARKERS
}
