pub mod datetime;
pub mod image;
pub mod internet;
pub mod lorem;
pub mod number;
pub mod person;
pub mod random;
pub mod rules;
pub mod traits;
pub mod words;

use lazy_static::lazy_static;
use std::collections::BTreeMap;
use traits::Generator;

lazy_static! {
    static ref GENERATORS: BTreeMap<String, Box<dyn Generator>> = {
        let mut m = BTreeMap::new();
        register(internet::email::Email, &mut m);
        register(internet::password::Password, &mut m);
        register(internet::username::Username, &mut m);
        register(internet::url::Url, &mut m);
        register(lorem::word::Word, &mut m);
        register(lorem::sentence::Sentence, &mut m);
        register(lorem::paragraph::Paragraph, &mut m);
        register(number::integer::Integer, &mut m);
        register(number::float::Float, &mut m);
        register(number::boolean::Boolean, &mut m);
        register(person::name::FullName, &mut m);
        register(person::name::FirstName, &mut m);
        register(person::name::LastName, &mut m);
        register(random::guid::RandomGuid, &mut m);
        register(random::string::RandomString, &mut m);
        register(datetime::date::PastDate, &mut m);
        register(datetime::date::Now, &mut m);
        register(image::placeholder::ImageUrl, &mut m);
        m
    };
}

fn register<G: Generator + 'static>(g: G, m: &mut BTreeMap<String, Box<dyn Generator>>) {
    m.insert(g.key().to_string(), Box::new(g));
}

pub fn get_generator(key: &str) -> Option<&'static dyn Generator> {
    GENERATORS.get(key).map(|g| g.as_ref())
}

/// Registered keys in sorted order.
pub fn generator_keys() -> Vec<&'static str> {
    GENERATORS.keys().map(String::as_str).collect()
}
