pub struct Theme
{
    pub name: &'static str,
    pub words: &'static [&'static str],
}

pub const ANIMALES: &[&str] = &[
    "gato", "perro", "caballo", "conejo", "raton", "pez", "vaca", "oveja",
    "pato", "gallina",
];

pub const COLORES: &[&str] = &[
    "rojo", "azul", "verde", "amarillo", "morado", "naranja", "rosado",
    "negro", "blanco", "gris",
];

pub const FRUTAS: &[&str] = &[
    "manzana", "banana", "uva", "pera", "sandia", "melon", "mango",
    "durazno", "cereza", "limon",
];

pub const CUERPO: &[&str] = &[
    "cabeza", "mano", "pie", "brazo", "pierna", "ojo", "nariz", "boca",
    "oreja", "codo",
];

pub fn themes() -> Vec<Theme>
{
    vec![
        Theme {
            name: "animales",
            words: ANIMALES,
        },
        Theme {
            name: "colores",
            words: COLORES,
        },
        Theme {
            name: "frutas",
            words: FRUTAS,
        },
        Theme {
            name: "cuerpo",
            words: CUERPO,
        },
    ]
}

pub fn theme_words(name: &str) -> Option<&'static [&'static str]>
{
    themes()
        .into_iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .map(|theme| theme.words)
}

pub fn default_theme() -> &'static str
{
    "animales"
}
