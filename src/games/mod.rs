pub mod sopa;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![GameDescriptor {
        name: "sopa",
        description: "Sopa de letras: encuentra las palabras escondidas",
    }]
}
