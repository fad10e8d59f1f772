//! Listas de palabras del vocabulario español incorporado
//!
//! Palabras en mayúsculas y sin tilde. Las listas son disjuntas: cada
//! palabra pertenece a una sola categoría.

pub const ARTICLES_MASCULINE: &[&str] = &["EL", "LOS"];

pub const ARTICLES_FEMININE: &[&str] = &["LA", "LAS"];

/// Artículos indefinidos: concuerdan con cualquier sustantivo
pub const ARTICLES_NEUTRAL: &[&str] = &["UN", "UNA", "UNOS", "UNAS"];

pub const NOUNS_MASCULINE: &[&str] = &[
    "GATO", "PERRO", "COCHE", "LIBRO", "TELEFONO", "JARDIN", "HOSPITAL", "PARQUE",
    "PAIS", "MUNDO", "SOL", "FUEGO", "CHICO", "HOMBRE", "PAPA",
    "HERMANO", "AMIGO", "PROFESOR",
];

pub const NOUNS_FEMININE: &[&str] = &[
    "CASA", "MESA", "SILLA", "COMPUTADORA", "VENTANA", "PUERTA", "ESCUELA",
    "CIUDAD", "LUNA", "ESTRELLA", "AGUA", "CHICA", "MUJER", "COMIDA", "MAMA",
    "HERMANA", "AMIGA", "ESTUDIANTE",
];

pub const VERBS: &[&str] = &[
    "CORRE", "SALTA", "COME", "BEBE", "DUERME", "CAMINA", "VUELA", "NADA",
    "ESTUDIA", "TRABAJA", "JUEGA", "CANTA", "BAILA", "ESCRIBE", "LEE",
    "HABLA", "ESCUCHA", "MIRA", "PIENSA", "SUEÑA", "ANDA", "VIVE",
    "ESTA", "ES", "TIENE", "HACE", "VE", "OYE", "TOCA", "SIENTE",
    "LLEGA", "SALE", "ENTRA", "SUBE", "BAJA", "ABRE", "CIERRA", "BUSCA",
];

pub const ADJECTIVES: &[&str] = &[
    "GRANDE", "PEQUEÑO", "BONITO", "FEO", "RAPIDO", "LENTO", "ALTO",
    "NEGRO", "BLANCO", "ROJO", "AZUL", "VERDE", "AMARILLO", "FELIZ", "TRISTE",
    "NUEVO", "VIEJO", "JOVEN", "FUERTE", "DEBIL", "INTELIGENTE",
];

pub const PREPOSITIONS: &[&str] = &[
    "EN", "DE", "CON", "SIN", "PARA", "POR", "SOBRE", "BAJO", "ENTRE", "DESDE",
];

pub const CONJUNCTIONS: &[&str] = &["Y", "O", "PERO", "AUNQUE", "PORQUE", "CUANDO", "SI"];
