//! Hardcoded page copy.
//!
//! Every text block on the page lives here so sections only do layout.
//! Icon names are passed through to the page's icon font untouched.

/// Company-wide facts used across sections (single source of truth).
#[derive(Debug)]
pub struct SiteInfo {
    /// Brand shown in the header and footer
    pub brand: &'static str,
    /// Year production started
    pub founded: u16,
    /// Primary phone number
    pub phone: &'static str,
    /// Contact email
    pub email: &'static str,
    /// Street address
    pub address: &'static str,
    /// Opening hours
    pub hours: &'static str,
    /// Year in the footer copyright line
    pub copyright_year: u16,
}

/// ЛесПром company info.
pub const SITE: SiteInfo = SiteInfo {
    brand: "ЛесПром",
    founded: 1998,
    phone: "+7 (495) 123-45-67",
    email: "info@lesprom.ru",
    address: "г. Москва, ул. Лесная, д. 10",
    hours: "Пн-Пт: 8:00-18:00, Сб: 9:00-15:00",
    copyright_year: 2024,
};

impl SiteInfo {
    /// `"Производство пиломатериалов с 1998 года"`
    pub fn since_badge(&self) -> String {
        format!("Производство пиломатериалов с {} года", self.founded)
    }

    /// `"© 2024 ЛесПром. Все права защищены."`
    pub fn copyright(&self) -> String {
        format!("© {} {}. Все права защищены.", self.copyright_year, self.brand)
    }
}

/// `tel:` link target with everything but digits and `+` stripped.
pub fn phone_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// Hero banner copy.
pub struct HeroCopy {
    /// Main heading
    pub title: &'static str,
    /// Sub-heading paragraph
    pub description: &'static str,
    /// Primary button (scrolls to the catalog)
    pub catalog_cta: &'static str,
    /// Secondary button (scrolls to the calculator)
    pub calculator_cta: &'static str,
    /// Banner image
    pub image: Image,
}

/// A static image asset.
#[derive(Clone, Copy, Debug)]
pub struct Image {
    /// Source URL
    pub src: &'static str,
    /// Alt text
    pub alt: &'static str,
}

/// Hero banner.
pub const HERO: HeroCopy = HeroCopy {
    title: "Качественные пиломатериалы для вашего строительства",
    description: "Собственное производство, доставка по России, гарантия качества и конкурентные цены",
    catalog_cta: "Перейти в каталог",
    calculator_cta: "Рассчитать стоимость",
    image: Image {
        src: "https://images.unsplash.com/photo-1611080626919-7cf5a9dbab5b?w=800&h=600&fit=crop",
        alt: "Пиломатериалы",
    },
};

/// Icon + title + text card (advantages, services).
#[derive(Debug)]
pub struct Card {
    /// Icon name
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub text: &'static str,
}

/// Strip of four advantages under the hero.
pub const ADVANTAGES: &[Card] = &[
    Card {
        icon: "check-circle-2",
        title: "Гарантия качества",
        text: "Сертификаты соответствия",
    },
    Card {
        icon: "truck",
        title: "Доставка",
        text: "По всей России",
    },
    Card {
        icon: "shield",
        title: "Надёжность",
        text: "25+ лет на рынке",
    },
    Card {
        icon: "percent",
        title: "Лучшие цены",
        text: "Прямые поставки",
    },
];

/// Section heading + sub-heading.
#[derive(Debug)]
pub struct SectionHeader {
    /// `<h2>` text
    pub title: &'static str,
    /// Line under the heading
    pub description: &'static str,
}

/// Catalog section heading.
pub const CATALOG_HEADER: SectionHeader = SectionHeader {
    title: "Каталог пиломатериалов",
    description: "Широкий ассортимент продукции для любых строительных задач",
};

/// Calculator section heading.
pub const CALCULATOR_HEADER: SectionHeader = SectionHeader {
    title: "Калькулятор стоимости",
    description: "Рассчитайте количество и стоимость пиломатериалов онлайн",
};

/// Services section heading.
pub const SERVICES_HEADER: SectionHeader = SectionHeader {
    title: "Наши услуги",
    description: "Полный спектр услуг для вашего удобства",
};

/// Blog section heading.
pub const BLOG_HEADER: SectionHeader = SectionHeader {
    title: "Полезные статьи",
    description: "Всё о пиломатериалах и их применении",
};

/// Contacts section heading.
pub const CONTACTS_HEADER: SectionHeader = SectionHeader {
    title: "Свяжитесь с нами",
    description: "Готовы ответить на все вопросы и помочь с выбором пиломатериалов",
};

/// "About" section copy.
pub struct AboutCopy {
    /// Heading
    pub title: &'static str,
    /// Lead paragraph
    pub lead: &'static str,
    /// Checklist under the paragraph
    pub points: &'static [&'static str],
    /// Side image
    pub image: Image,
}

/// About ЛесПром.
pub const ABOUT: AboutCopy = AboutCopy {
    title: "О компании ЛесПром",
    lead: "Более 25 лет мы занимаемся производством и поставкой высококачественных пиломатериалов. \
           Собственное производство позволяет нам контролировать качество на всех этапах и предлагать \
           конкурентные цены.",
    points: &[
        "Современное деревообрабатывающее оборудование",
        "Квалифицированный персонал с многолетним опытом",
        "Строгий контроль качества на всех этапах",
        "Экологичное производство и ответственный подход",
    ],
    image: Image {
        src: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=800&h=600&fit=crop",
        alt: "О компании",
    },
};

/// Services grid.
pub const SERVICES: &[Card] = &[
    Card {
        icon: "truck",
        title: "Доставка",
        text: "Организуем доставку пиломатериалов по всей России собственным и привлечённым транспортом",
    },
    Card {
        icon: "hammer",
        title: "Обработка",
        text: "Предлагаем услуги по дополнительной обработке: строгание, торцовка, пропитка антисептиками",
    },
    Card {
        icon: "message-circle",
        title: "Консультация",
        text: "Наши специалисты помогут подобрать материалы и рассчитать необходимое количество",
    },
];

/// Blog teaser metadata
#[derive(Debug)]
pub struct BlogPost {
    /// Article title
    pub title: &'static str,
    /// Category badge
    pub category: &'static str,
    /// Publication date, already human-formatted
    pub date: &'static str,
}

/// Latest articles, newest first.
pub const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Как выбрать доску для строительства дома",
        category: "Материалы",
        date: "15 января 2024",
    },
    BlogPost {
        title: "Виды бруса и их применение в строительстве",
        category: "Советы",
        date: "10 января 2024",
    },
    BlogPost {
        title: "Правильное хранение пиломатериалов",
        category: "Эксплуатация",
        date: "5 января 2024",
    },
];

/// How a contacts row can be acted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    /// Dialable number
    Phone,
    /// Email address
    Email,
    /// Plain text
    Text,
}

/// One row of the contacts list.
#[derive(Debug)]
pub struct ContactChannel {
    /// Link behavior
    pub kind: ChannelKind,
    /// Icon name
    pub icon: &'static str,
    /// Label
    pub title: &'static str,
    /// Value
    pub value: &'static str,
}

/// Contacts list.
pub const CONTACTS: &[ContactChannel] = &[
    ContactChannel {
        kind: ChannelKind::Phone,
        icon: "phone",
        title: "Телефон",
        value: SITE.phone,
    },
    ContactChannel {
        kind: ChannelKind::Email,
        icon: "mail",
        title: "Email",
        value: SITE.email,
    },
    ContactChannel {
        kind: ChannelKind::Text,
        icon: "map-pin",
        title: "Адрес",
        value: SITE.address,
    },
    ContactChannel {
        kind: ChannelKind::Text,
        icon: "clock",
        title: "Режим работы",
        value: SITE.hours,
    },
];

impl ContactChannel {
    /// `tel:` / `mailto:` target, `None` for plain rows.
    pub fn href(&self) -> Option<String> {
        match self.kind {
            ChannelKind::Phone => Some(phone_href(self.value)),
            ChannelKind::Email => Some(format!("mailto:{}", self.value)),
            ChannelKind::Text => None,
        }
    }
}

/// A text field of the callback form.
#[derive(Debug)]
pub struct FormField {
    /// Input id (also the label's `for`)
    pub id: &'static str,
    /// Label text
    pub label: &'static str,
    /// Placeholder
    pub placeholder: &'static str,
}

/// Callback request form.
pub struct CallbackForm {
    /// Card title
    pub title: &'static str,
    /// Card description
    pub description: &'static str,
    /// Inputs in order
    pub fields: &'static [FormField],
    /// Send button text
    pub submit: &'static str,
}

/// The contact card on the right of the contacts section.
pub const CALLBACK_FORM: CallbackForm = CallbackForm {
    title: "Заказать обратный звонок",
    description: "Оставьте заявку и мы свяжемся с вами в ближайшее время",
    fields: &[
        FormField {
            id: "name",
            label: "Имя",
            placeholder: "Ваше имя",
        },
        FormField {
            id: "phone",
            label: "Телефон",
            placeholder: "+7 (___) ___-__-__",
        },
        FormField {
            id: "message",
            label: "Комментарий",
            placeholder: "Ваш вопрос или комментарий",
        },
    ],
    submit: "Отправить заявку",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn site_strings() {
        assert_eq!(SITE.since_badge(), "Производство пиломатериалов с 1998 года");
        assert_eq!(SITE.copyright(), "© 2024 ЛесПром. Все права защищены.");
        assert_eq!(phone_href(SITE.phone), "tel:+74951234567");
    }

    #[test]
    fn contact_links() {
        let hrefs: Vec<Option<String>> = CONTACTS.iter().map(ContactChannel::href).collect();
        assert_eq!(
            hrefs,
            vec![
                Some("tel:+74951234567".to_string()),
                Some("mailto:info@lesprom.ru".to_string()),
                None,
                None,
            ]
        );
    }

    #[test]
    fn section_sizes() {
        assert_eq!(ADVANTAGES.len(), 4);
        assert_eq!(ABOUT.points.len(), 4);
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(POSTS.len(), 3);
        assert_eq!(CONTACTS.len(), 4);
        assert_eq!(CALLBACK_FORM.fields.len(), 3);
    }

    #[test]
    fn form_field_ids_are_unique() {
        let mut ids: Vec<&str> = CALLBACK_FORM.fields.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CALLBACK_FORM.fields.len());
    }
}
