//! Static site copy: the prose the pages mount around the widgets.

/// Accordion sections on the services page, as explicit (toggle, body)
/// pairs.
pub const SERVICE_SECTIONS: &[(&str, &str)] = &[
    (
        "Custom Celebration Cakes",
        "Birthday, anniversary and baby-shower cakes built to order. Pick a base from the gallery and we match flavours, colours and toppers to your party.",
    ),
    (
        "Wedding Cakes",
        "Tiered showpieces with a tasting session in the month before the big day. We deliver and assemble on site.",
    ),
    (
        "Cupcake & Treat Trays",
        "Mixed trays of cupcakes, brownies and blondies for offices and school fairs. Orders of twelve or more come boxed for free.",
    ),
    (
        "Baking Classes",
        "Small-group classes on Saturday mornings. Aprons, ingredients and coffee included, and you take your bakes home.",
    ),
];

/// Tab panels on the about page, same (toggle, body) shape as the
/// accordion.
pub const ABOUT_TABS: &[(&str, &str)] = &[
    (
        "Our Story",
        "Sugarplum started as a weekend market stall in 2014 and moved into the corner shop on Baker Lane two years later. Everything is still mixed, baked and iced in the one kitchen behind the counter.",
    ),
    (
        "The Bakers",
        "Rosa runs the ovens and develops every recipe on the menu. Tom handles decoration and the sugar work you see in the window. Weekends bring two apprentices over from the local college.",
    ),
    (
        "Visit Us",
        "14 Baker Lane, open Tuesday to Sunday, 8am to 4pm. Walk in for counter treats any time; celebration cakes need three days notice.",
    ),
];

/// Headline and body of the promotional popover.
pub const OFFER_TITLE: &str = "This week only";
pub const OFFER_BODY: &str =
    "10% off every chocolate bake until Sunday. Mention SWEET10 at the counter or in your order notes.";

/// Heading over the customer quotes on the home page.
pub const TESTIMONIALS_TITLE: &str = "What customers say";
