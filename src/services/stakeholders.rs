use anyhow::Result;

use crate::{
    data::{Data, Stakeholder},
    geo::Point,
};

/// Stakeholder search. `origin` and `distance` narrow the result to a radius in miles
/// and order it nearest first; without them the store's name ordering is kept.
pub async fn query(
    data: &Data,
    name: Option<&str>,
    category_ids: &[i32],
    origin: Option<Point>,
    distance: Option<f64>,
) -> Result<Vec<Stakeholder>> {
    if category_ids.is_empty() {
        return Ok(vec![]);
    }

    let name = name.map(str::trim).filter(|name| !name.is_empty());
    let rows = data.stakeholders.query(name, category_ids).await?;

    let Some(origin) = origin else {
        return Ok(rows
            .into_iter()
            .map(|row| Stakeholder::from_row(row, None))
            .collect());
    };

    let mut result = rows
        .into_iter()
        .map(|row| {
            let miles = match (row.latitude, row.longitude) {
                (Some(lat), Some(lon)) => Some(origin.miles_to(&Point::new(lat, lon))),
                _ => None,
            };
            Stakeholder::from_row(row, miles)
        })
        .collect::<Vec<Stakeholder>>();

    if let Some(radius) = distance.filter(|d| *d > 0.0) {
        result.retain(|s| s.distance.is_some_and(|miles| miles <= radius));
        result.sort_by(|a, b| {
            let a = a.distance.unwrap_or(f64::MAX);
            let b = b.distance.unwrap_or(f64::MAX);
            a.total_cmp(&b)
        });
    }

    Ok(result)
}
