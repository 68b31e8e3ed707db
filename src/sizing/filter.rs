use crate::equipment::TypedEquipment;
use crate::load::UserPreferences;

/// 선호 조건을 모두(AND) 만족하는지 확인한다. 지정하지 않은 조건은 제약이 없다.
///
/// AFUE 하한은 AFUE 등급이 있는 장비(퍼니스/보일러/일체형)에만 적용된다.
pub fn passes_filters(eq: &TypedEquipment, prefs: &UserPreferences) -> bool {
    let info = &eq.info;

    if !prefs.brand_filter.is_empty() && !prefs.brand_filter.contains(&info.manufacturer) {
        return false;
    }
    if let Some(dist) = prefs.distribution_type {
        if info.distribution_type != dist {
            return false;
        }
    }
    if !prefs.staging_filter.is_empty() && !prefs.staging_filter.contains(&info.staging) {
        return false;
    }
    if let (Some(min_afue), Some(afue)) = (prefs.min_afue, eq.afue()) {
        if afue < min_afue {
            return false;
        }
    }
    if let Some(max_price) = prefs.max_price {
        if info.price > max_price {
            return false;
        }
    }
    if !prefs.unit_location_filter.is_empty()
        && !prefs.unit_location_filter.contains(&info.unit_location)
    {
        return false;
    }
    true
}
