//! Province -> municipality -> point cascade over the center list
//!
//! The selector is a pure view over one fetched snapshot. Options at each
//! level keep the order the backend returned them in, deduplicated; choosing
//! a broader level clears the narrower ones.

use padron_domain::RegistrationCenter;

/// Drives the three-level registration-center picker.
#[derive(Debug, Clone, Default)]
pub struct CenterSelector {
    centers: Vec<RegistrationCenter>,
    province: Option<String>,
    municipality: Option<String>,
    point_id: Option<i64>,
}

impl CenterSelector {
    pub fn new(centers: Vec<RegistrationCenter>) -> Self {
        Self { centers, province: None, municipality: None, point_id: None }
    }

    /// Distinct provinces, in directory order.
    pub fn provinces(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for center in &self.centers {
            if !seen.contains(&center.provincia.as_str()) {
                seen.push(center.provincia.as_str());
            }
        }
        seen
    }

    /// Distinct municipalities within the selected province.
    pub fn municipalities(&self) -> Vec<&str> {
        let Some(province) = &self.province else {
            return Vec::new();
        };
        let mut seen = Vec::new();
        for center in self.centers.iter().filter(|c| &c.provincia == province) {
            if !seen.contains(&center.municipio.as_str()) {
                seen.push(center.municipio.as_str());
            }
        }
        seen
    }

    /// Registration points within the selected province and municipality.
    pub fn points(&self) -> Vec<&RegistrationCenter> {
        let (Some(province), Some(municipality)) = (&self.province, &self.municipality) else {
            return Vec::new();
        };
        self.centers
            .iter()
            .filter(|c| &c.provincia == province && &c.municipio == municipality)
            .collect()
    }

    /// Pick a province, discarding the narrower selections.
    pub fn select_province(&mut self, province: &str) {
        self.province = Some(province.to_owned());
        self.municipality = None;
        self.point_id = None;
    }

    /// Pick a municipality, discarding the point selection.
    pub fn select_municipality(&mut self, municipality: &str) {
        self.municipality = Some(municipality.to_owned());
        self.point_id = None;
    }

    /// Pick a registration point by id. Ignored unless the id belongs to the
    /// currently visible points.
    pub fn select_point(&mut self, id: i64) -> bool {
        if self.points().iter().any(|c| c.id == id) {
            self.point_id = Some(id);
            true
        } else {
            false
        }
    }

    /// The fully selected center, once all three levels are chosen.
    pub fn selected(&self) -> Option<&RegistrationCenter> {
        let id = self.point_id?;
        self.centers.iter().find(|c| c.id == id)
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.point_id
    }

    pub fn clear(&mut self) {
        self.province = None;
        self.municipality = None;
        self.point_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(id: i64, provincia: &str, municipio: &str, punto: &str) -> RegistrationCenter {
        RegistrationCenter {
            id,
            provincia: provincia.to_owned(),
            municipio: municipio.to_owned(),
            punto_de_empadronamiento: punto.to_owned(),
            id_ruta: 1,
            nombre_ruta: "RUTA 1".to_owned(),
        }
    }

    fn selector() -> CenterSelector {
        CenterSelector::new(vec![
            center(1, "MURILLO", "LA PAZ", "ESCUELA CENTRAL"),
            center(2, "MURILLO", "LA PAZ", "MERCADO SUR"),
            center(3, "MURILLO", "EL ALTO", "UNIDAD NORTE"),
            center(4, "LOS ANDES", "PUCARANI", "PLAZA PRINCIPAL"),
        ])
    }

    #[test]
    fn provinces_are_deduplicated_in_order() {
        assert_eq!(selector().provinces(), vec!["MURILLO", "LOS ANDES"]);
    }

    #[test]
    fn narrower_levels_are_empty_until_selected() {
        let mut s = selector();
        assert!(s.municipalities().is_empty());
        assert!(s.points().is_empty());

        s.select_province("MURILLO");
        assert_eq!(s.municipalities(), vec!["LA PAZ", "EL ALTO"]);
        assert!(s.points().is_empty());

        s.select_municipality("LA PAZ");
        let points: Vec<i64> = s.points().iter().map(|c| c.id).collect();
        assert_eq!(points, vec![1, 2]);
    }

    #[test]
    fn changing_province_clears_the_narrower_selections() {
        let mut s = selector();
        s.select_province("MURILLO");
        s.select_municipality("LA PAZ");
        assert!(s.select_point(2));
        assert_eq!(s.selected_id(), Some(2));

        s.select_province("LOS ANDES");
        assert_eq!(s.selected_id(), None);
        assert!(s.municipalities().contains(&"PUCARANI"));
    }

    #[test]
    fn point_outside_the_visible_list_is_rejected() {
        let mut s = selector();
        s.select_province("MURILLO");
        s.select_municipality("LA PAZ");
        assert!(!s.select_point(4));
        assert_eq!(s.selected_id(), None);
    }

    #[test]
    fn selected_returns_the_full_record() {
        let mut s = selector();
        s.select_province("LOS ANDES");
        s.select_municipality("PUCARANI");
        assert!(s.select_point(4));
        let chosen = s.selected().expect("selection complete");
        assert_eq!(chosen.punto_de_empadronamiento, "PLAZA PRINCIPAL");
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = selector();
        s.select_province("MURILLO");
        s.select_municipality("EL ALTO");
        s.clear();
        assert!(s.municipalities().is_empty());
        assert_eq!(s.selected_id(), None);
    }
}
