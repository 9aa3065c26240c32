use crate::quiz_engine::models::Region;

/// Regions whose countries make believable third-tier distractors.
///
/// The relation is authored per region and is not symmetric: AFRICA lists
/// MIDDLE_EAST, but OCEANIA lists only ASIA while ASIA lists three neighbours.
pub fn neighbors(region: Region) -> &'static [Region] {
    use Region::*;
    match region {
        CentralEurope => &[EasternEurope, Europe, WesternEurope],
        EasternEurope => &[CentralEurope, Europe, Asia, WesternEurope],
        Europe        => &[CentralEurope, EasternEurope, WesternEurope],
        WesternEurope => &[CentralEurope, Europe, NorthAmerica],
        Asia          => &[MiddleEast, Oceania, SouthAsia],
        SouthAsia     => &[Asia, MiddleEast],
        MiddleEast    => &[Asia, Africa, SouthAsia],
        Africa        => &[MiddleEast],
        LatinAmerica  => &[Caribbean, NorthAmerica],
        Caribbean     => &[LatinAmerica, NorthAmerica],
        Oceania       => &[Asia],
        NorthAmerica  => &[Europe, LatinAmerica, WesternEurope],
    }
}

/// True if `other` is listed as a neighbour of `region`.
pub fn is_neighbor(region: Region, other: Region) -> bool {
    neighbors(region).contains(&other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_region_neighbours_itself() {
        for r in Region::ALL {
            assert!(!is_neighbor(r, r), "{r} lists itself");
            assert!(!neighbors(r).is_empty(), "{r} has no neighbours");
        }
    }

    #[test]
    fn asymmetry_is_preserved() {
        assert!(is_neighbor(Region::EasternEurope, Region::Asia));
        assert!(!is_neighbor(Region::Asia, Region::EasternEurope));
        assert!(is_neighbor(Region::WesternEurope, Region::NorthAmerica));
        assert!(!is_neighbor(Region::NorthAmerica, Region::CentralEurope));
        assert!(!is_neighbor(Region::Africa, Region::Asia));
    }
}
