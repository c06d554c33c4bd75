//! The closed set of terrain tags a Tile can carry.
//!
//! The vocabulary follows the layer/feature pairs of the Dutch large-scale
//! topography registry (BGT) that the rasterizer emits, one tag per rasterized
//! feature kind. The engine never interprets a tag; it only sums the Weights
//! an external table assigns to them.

/// A categorical terrain tag; every Tile carries zero or more as a bitmask.
///
/// The discriminant is the tag's bit position in an [`AttributeSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)] // the variants are BGT layer/feature names, not API
pub enum TileAttribute {
    Waterdeel = 0,
    OndersteunendWaterdeelOeverSlootkant = 1,
    OndersteunendWaterdeelSlik = 2,
    WegdeelVoetpad = 3,
    WegdeelParkeervlak = 4,
    WegdeelSpoorbaan = 5,
    WegdeelOverweg = 6,
    WegdeelVoetgangersgebied = 7,
    WegdeelVoetpadOpTrap = 8,
    WegdeelFietspad = 9,
    WegdeelRijbaanAutoweg = 10,
    WegdeelRijbaanLokaleWeg = 11,
    WegdeelRijbaanRegionaleWeg = 12,
    WegdeelBaanVoorVliegverkeer = 13,
    WegdeelRijbaanAutosnelweg = 14,
    WegdeelInrit = 15,
    WegdeelWoonerf = 16,
    WegdeelRuiterpad = 17,
    WegdeelOvBaan = 18,
    WegdeelOpenVerharding = 19,
    WegdeelHalfVerhard = 20,
    WegdeelGeslotenVerharding = 21,
    WegdeelOnverhard = 22,
    OndersteunendWegdeelBerm = 23,
    OndersteunendWegdeelGeslotenVerharding = 24,
    OndersteunendWegdeelGroenvoorziening = 25,
    OndersteunendWegdeelHalfVerhard = 26,
    OndersteunendWegdeelOnverhard = 27,
    OndersteunendWegdeelOpenVerharding = 28,
    OndersteunendWegdeelVerkeerseiland = 29,
    OnbegroeidTerreindeelErf = 30,
    OnbegroeidTerreindeelGeslotenVerharding = 31,
    OnbegroeidTerreindeelHalfVerhard = 32,
    OnbegroeidTerreindeelOnverhard = 33,
    OnbegroeidTerreindeelOpenVerharding = 34,
    OnbegroeidTerreindeelZand = 35,
    BegroeidTerreindeelBoomteelt = 36,
    BegroeidTerreindeelBouwland = 37,
    BegroeidTerreindeelDuin = 38,
    BegroeidTerreindeelFruitteelt = 39,
    BegroeidTerreindeelGemengdBos = 40,
    BegroeidTerreindeelGraslandAgrarisch = 41,
    BegroeidTerreindeelGraslandOverig = 42,
    BegroeidTerreindeelGroenvoorziening = 43,
    BegroeidTerreindeelHeide = 44,
    BegroeidTerreindeelHoutwal = 45,
    BegroeidTerreindeelKwelder = 46,
    BegroeidTerreindeelLoofbos = 47,
    BegroeidTerreindeelMoeras = 48,
    BegroeidTerreindeelNaaldbos = 49,
    BegroeidTerreindeelRietland = 50,
    BegroeidTerreindeelStruiken = 51,
    Pand = 52,
    VegetatieobjectBoom = 53,
    VegetatieobjectHaag = 54,
    VegetatieobjectWaardeOnbekend = 55,
    ScheidingDamwand = 56,
    ScheidingGeluidsscherm = 57,
    ScheidingHek = 58,
    ScheidingKademuur = 59,
    ScheidingMuur = 60,
    ScheidingWalbescherming = 61,
}

use self::TileAttribute::*;

const ALL: [TileAttribute; TileAttribute::COUNT] = [
    Waterdeel,
    OndersteunendWaterdeelOeverSlootkant,
    OndersteunendWaterdeelSlik,
    WegdeelVoetpad,
    WegdeelParkeervlak,
    WegdeelSpoorbaan,
    WegdeelOverweg,
    WegdeelVoetgangersgebied,
    WegdeelVoetpadOpTrap,
    WegdeelFietspad,
    WegdeelRijbaanAutoweg,
    WegdeelRijbaanLokaleWeg,
    WegdeelRijbaanRegionaleWeg,
    WegdeelBaanVoorVliegverkeer,
    WegdeelRijbaanAutosnelweg,
    WegdeelInrit,
    WegdeelWoonerf,
    WegdeelRuiterpad,
    WegdeelOvBaan,
    WegdeelOpenVerharding,
    WegdeelHalfVerhard,
    WegdeelGeslotenVerharding,
    WegdeelOnverhard,
    OndersteunendWegdeelBerm,
    OndersteunendWegdeelGeslotenVerharding,
    OndersteunendWegdeelGroenvoorziening,
    OndersteunendWegdeelHalfVerhard,
    OndersteunendWegdeelOnverhard,
    OndersteunendWegdeelOpenVerharding,
    OndersteunendWegdeelVerkeerseiland,
    OnbegroeidTerreindeelErf,
    OnbegroeidTerreindeelGeslotenVerharding,
    OnbegroeidTerreindeelHalfVerhard,
    OnbegroeidTerreindeelOnverhard,
    OnbegroeidTerreindeelOpenVerharding,
    OnbegroeidTerreindeelZand,
    BegroeidTerreindeelBoomteelt,
    BegroeidTerreindeelBouwland,
    BegroeidTerreindeelDuin,
    BegroeidTerreindeelFruitteelt,
    BegroeidTerreindeelGemengdBos,
    BegroeidTerreindeelGraslandAgrarisch,
    BegroeidTerreindeelGraslandOverig,
    BegroeidTerreindeelGroenvoorziening,
    BegroeidTerreindeelHeide,
    BegroeidTerreindeelHoutwal,
    BegroeidTerreindeelKwelder,
    BegroeidTerreindeelLoofbos,
    BegroeidTerreindeelMoeras,
    BegroeidTerreindeelNaaldbos,
    BegroeidTerreindeelRietland,
    BegroeidTerreindeelStruiken,
    Pand,
    VegetatieobjectBoom,
    VegetatieobjectHaag,
    VegetatieobjectWaardeOnbekend,
    ScheidingDamwand,
    ScheidingGeluidsscherm,
    ScheidingHek,
    ScheidingKademuur,
    ScheidingMuur,
    ScheidingWalbescherming,
];

impl TileAttribute {
    /// The number of distinct tags.
    pub const COUNT: usize = 62;

    /// All tags in ordinal order.
    pub fn all() -> std::iter::Copied<std::slice::Iter<'static, TileAttribute>> {
        ALL.iter().copied()
    }

    /// The tag's bit position.
    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

/// A set of [`TileAttribute`]s packed into a single 64-bit mask.
///
/// Membership, union and intersection are single instructions, which matters
/// because every Cell of the Grid carries one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet(u64);

impl AttributeSet {
    /// The set without any tags.
    pub const EMPTY: AttributeSet = AttributeSet(0);

    /// Builds a set from a list of tags.
    pub fn from_slice(attributes: &[TileAttribute]) -> AttributeSet {
        let mut set = AttributeSet::EMPTY;
        for &attribute in attributes {
            set.insert(attribute);
        }
        set
    }

    /// Whether the tag is in the set.
    pub fn contains(self, attribute: TileAttribute) -> bool {
        self.0 & (1 << attribute.ordinal()) != 0
    }

    /// Adds the tag to the set.
    pub fn insert(&mut self, attribute: TileAttribute) {
        self.0 |= 1 << attribute.ordinal();
    }

    /// Removes the tag from the set.
    pub fn remove(&mut self, attribute: TileAttribute) {
        self.0 &= !(1 << attribute.ordinal());
    }

    /// Whether the set holds no tags.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The number of tags in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The tags present in either set.
    pub fn union(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 | other.0)
    }

    /// The tags present in both sets.
    pub fn intersection(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 & other.0)
    }

    /// Iterates the tags in the set, in ordinal order.
    pub fn iter(self) -> impl Iterator<Item = TileAttribute> {
        TileAttribute::all().filter(move |&attribute| self.contains(attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_positions() {
        for (position, attribute) in TileAttribute::all().enumerate() {
            assert_eq!(attribute.ordinal() as usize, position);
        }
        assert_eq!(TileAttribute::all().count(), TileAttribute::COUNT);
    }

    #[test]
    fn membership() {
        let mut set = AttributeSet::EMPTY;
        assert!(set.is_empty());

        set.insert(Waterdeel);
        set.insert(Pand);
        assert!(set.contains(Waterdeel));
        assert!(set.contains(Pand));
        assert!(!set.contains(WegdeelFietspad));
        assert_eq!(set.len(), 2);

        set.remove(Waterdeel);
        assert!(!set.contains(Waterdeel));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_operations() {
        let roads = AttributeSet::from_slice(&[WegdeelFietspad, WegdeelVoetpad]);
        let wet = AttributeSet::from_slice(&[Waterdeel, WegdeelFietspad]);

        assert_eq!(roads.union(wet).len(), 3);
        assert_eq!(roads.intersection(wet).len(), 1);
        assert!(roads.intersection(wet).contains(WegdeelFietspad));
    }

    #[test]
    fn iteration_order() {
        let set = AttributeSet::from_slice(&[Pand, Waterdeel, WegdeelVoetpad]);
        let tags: Vec<_> = set.iter().collect();
        assert_eq!(tags, vec![Waterdeel, WegdeelVoetpad, Pand]);
    }
}
