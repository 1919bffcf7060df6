use std::rc::Rc;

use yew::Reducible;

/// Project typologies the studio works in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Vivienda,
    Interiorismo,
    Comercial,
    Rehabilitacion,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Vivienda => "Vivienda",
            Category::Interiorismo => "Interiorismo",
            Category::Comercial => "Comercial",
            Category::Rehabilitacion => "Rehabilitación",
        }
    }
}

/// The gallery filter. `All` shows the whole catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }

    /// `All` followed by each category present in `catalog`, in order of
    /// first appearance.
    pub fn options(catalog: &[Project]) -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        for project in catalog {
            let option = CategoryFilter::Only(project.category);
            if !options.contains(&option) {
                options.push(option);
            }
        }
        options
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub year: u16,
    pub location: &'static str,
    pub image_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Casa Patio",
        category: Category::Vivienda,
        year: 2024,
        location: "Sevilla, España",
        image_url: "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop",
    },
    Project {
        id: 2,
        title: "Loft Industrial",
        category: Category::Interiorismo,
        year: 2023,
        location: "Madrid, España",
        image_url: "https://images.unsplash.com/photo-1493809842364-78817add7ffb?q=80&w=1600&auto=format&fit=crop",
    },
    Project {
        id: 3,
        title: "Oficinas Nexus",
        category: Category::Comercial,
        year: 2025,
        location: "Barcelona, España",
        image_url: "https://images.unsplash.com/photo-1451976426598-a7593bd6d0b2?q=80&w=1600&auto=format&fit=crop",
    },
    Project {
        id: 4,
        title: "Rehabilitación Torre",
        category: Category::Rehabilitacion,
        year: 2022,
        location: "Valencia, España",
        image_url: "https://images.unsplash.com/photo-1479839672679-a46483c0e7c8?q=80&w=1600&auto=format&fit=crop",
    },
    Project {
        id: 5,
        title: "Vivienda entre medianeras",
        category: Category::Vivienda,
        year: 2021,
        location: "Bilbao, España",
        image_url: "https://images.unsplash.com/photo-1523217582562-09d0def993a6?q=80&w=1600&auto=format&fit=crop",
    },
    Project {
        id: 6,
        title: "Showroom Materia",
        category: Category::Comercial,
        year: 2024,
        location: "Málaga, España",
        image_url: "https://images.unsplash.com/photo-1503387762-592deb58ef4e?q=80&w=1600&auto=format&fit=crop",
    },
];

/// Stable filter over `catalog`; never reorders.
pub fn visible_projects(catalog: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    catalog.iter().filter(|project| filter.matches(project)).collect()
}

/// Gallery state: the active filter over a fixed catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    catalog: &'static [Project],
    active: CategoryFilter,
}

impl Gallery {
    pub fn new(catalog: &'static [Project]) -> Self {
        Self { catalog, active: CategoryFilter::All }
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn options(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options(self.catalog)
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        visible_projects(self.catalog, self.active)
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(PROJECTS)
    }
}

/// Dispatching a filter makes it the active one.
impl Reducible for Gallery {
    type Action = CategoryFilter;

    fn reduce(self: Rc<Self>, filter: CategoryFilter) -> Rc<Self> {
        if self.active == filter {
            return self;
        }
        Rc::new(Gallery { catalog: self.catalog, active: filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn catalog_ids_are_unique() {
        let unique: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), PROJECTS.len());
    }

    #[test]
    fn every_project_category_is_selectable() {
        let options = CategoryFilter::options(PROJECTS);
        for project in PROJECTS {
            assert!(options.contains(&CategoryFilter::Only(project.category)));
        }
    }

    #[test]
    fn options_follow_catalog_order() {
        let labels: Vec<&str> = CategoryFilter::options(PROJECTS)
            .into_iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(
            labels,
            vec!["Todos", "Vivienda", "Interiorismo", "Comercial", "Rehabilitación"]
        );
    }

    #[test]
    fn each_filter_keeps_exactly_its_matches_in_order() {
        for filter in CategoryFilter::options(PROJECTS) {
            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| match filter {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(c) => p.category == c,
                })
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&visible_projects(PROJECTS, filter)), expected);
        }
    }

    #[test]
    fn commercial_yields_two_cards_in_catalog_order() {
        let visible = visible_projects(PROJECTS, CategoryFilter::Only(Category::Comercial));
        let titles: Vec<&str> = visible.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Oficinas Nexus", "Showroom Materia"]);
    }

    #[test]
    fn category_counts_match_the_studio_portfolio() {
        let count = |c| visible_projects(PROJECTS, CategoryFilter::Only(c)).len();
        assert_eq!(count(Category::Vivienda), 2);
        assert_eq!(count(Category::Interiorismo), 1);
        assert_eq!(count(Category::Comercial), 2);
        assert_eq!(count(Category::Rehabilitacion), 1);
    }

    fn gallery_ids(gallery: &Gallery) -> Vec<u32> {
        gallery.visible().iter().map(|p| p.id).collect()
    }

    #[test]
    fn gallery_starts_unfiltered() {
        let gallery = Gallery::default();
        assert_eq!(gallery.active(), CategoryFilter::All);
        assert_eq!(gallery_ids(&gallery), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn selecting_the_same_filter_twice_changes_nothing() {
        let commercial = CategoryFilter::Only(Category::Comercial);
        let once = Rc::new(Gallery::default()).reduce(commercial);
        let twice = once.clone().reduce(commercial);
        assert!(Rc::ptr_eq(&once, &twice));
        assert_eq!(gallery_ids(&twice), vec![3, 6]);
    }

    #[test]
    fn selecting_all_after_a_filter_restores_the_catalog() {
        let initial = Rc::new(Gallery::default());
        let mut gallery = initial.clone();
        for filter in initial.options() {
            gallery = gallery.reduce(filter).reduce(CategoryFilter::All);
            assert_eq!(gallery_ids(&gallery), gallery_ids(&initial));
        }
    }

    #[test]
    fn category_without_projects_yields_nothing() {
        let housing_only = &PROJECTS[..1];
        let visible = visible_projects(housing_only, CategoryFilter::Only(Category::Interiorismo));
        assert!(visible.is_empty());
        assert_eq!(CategoryFilter::options(housing_only).len(), 2);
    }
}
