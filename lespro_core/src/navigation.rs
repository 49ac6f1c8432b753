//! Page sections and the nav-label -> section-id mapping.

/// Top-level sections of the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero banner
    Home,
    /// Product grid
    Catalog,
    /// Price calculator
    Calculator,
    /// Company info
    About,
    /// Services list
    Services,
    /// Blog teasers
    Blog,
    /// Contacts and callback form
    Contacts,
}

impl Section {
    /// All sections in nav order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Catalog,
        Section::Calculator,
        Section::About,
        Section::Services,
        Section::Blog,
        Section::Contacts,
    ];

    /// Text of the nav button.
    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::Calculator => "Калькулятор",
            Section::About => "О компании",
            Section::Services => "Услуги",
            Section::Blog => "Блог",
            Section::Contacts => "Контакты",
        }
    }

    /// DOM id of the section element. Always equals
    /// `section_id_for_label(self.label())`.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "главная",
            Section::Catalog => "каталог",
            Section::Calculator => "калькулятор",
            Section::About => "о-компании",
            Section::Services => "услуги",
            Section::Blog => "блог",
            Section::Contacts => "контакты",
        }
    }

    /// Resolve a DOM id back to its section.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Section id for a nav label: lower-cased, first space replaced by `-`.
pub fn section_id_for_label(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_follow_label_mapping() {
        for section in Section::ALL {
            assert_eq!(section.id(), section_id_for_label(section.label()));
        }
    }

    #[test]
    fn only_first_space_is_replaced() {
        assert_eq!(section_id_for_label("О компании"), "о-компании");
        assert_eq!(section_id_for_label("Наши Услуги Тут"), "наши-услуги тут");
        assert_eq!(section_id_for_label("Блог"), "блог");
    }

    #[test]
    fn from_id_round_trips() {
        assert_eq!(Section::from_id("калькулятор"), Some(Section::Calculator));
        assert_eq!(Section::from_id("о-компании"), Some(Section::About));
        assert_eq!(Section::from_id("pricing"), None);
    }
}
