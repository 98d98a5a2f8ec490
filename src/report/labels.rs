use crate::model::DatumConvention;
use std::{collections::HashMap, sync::LazyLock};

/// Operator-facing description of each datum convention.
static DATUM_LABEL_LOOKUP: LazyLock<HashMap<DatumConvention, &'static str>> = LazyLock::new(|| {
    let mut lookup = HashMap::new();
    let labels = vec![
        (DatumConvention::Wing2PointsAft, "wing leading edge, 2 weighing points aft of datum"),
        (DatumConvention::Wing1PointFwd, "wing leading edge, 1 weighing point forward of datum"),
        (DatumConvention::WingWheelFwd, "wing leading edge, main wheel forward of datum"),
        (DatumConvention::ForwardGlider, "datum ahead of the glider"),
    ];

    for (datum, label) in labels {
        lookup.insert(datum, label);
    }
    lookup
});

pub fn datum_label(datum: DatumConvention) -> &'static str {
    DATUM_LABEL_LOOKUP.get(&datum).copied().unwrap_or("unknown datum")
}
