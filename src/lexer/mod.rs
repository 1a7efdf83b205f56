use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("const")]
    Const,
    #[terminal("true")]
    True,
    #[terminal("false")]
    False,
    #[literal("[a-zA-Z_][a-zA-Z0-9_]*(::[a-zA-Z_][a-zA-Z0-9_]*)*")]
    Ident,
    #[literal("-?[0-9]+")]
    Integer,
    #[literal(r"'([^'\\]|\\.)'")]
    CharLiteral,
    #[terminal("<")]
    LAngle,
    #[terminal(">")]
    RAngle,
    #[terminal(",")]
    Comma,
    #[terminal("*")]
    Star,
    #[terminal("&")]
    Ampersand,
    #[terminal("[")]
    LBracket,
    #[terminal("]")]
    RBracket,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Const(inner) => inner.position.clone(),
            Token::True(inner) => inner.position.clone(),
            Token::False(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::Integer(inner) => inner.position.clone(),
            Token::CharLiteral(inner) => inner.position.clone(),
            Token::LAngle(inner) => inner.position.clone(),
            Token::RAngle(inner) => inner.position.clone(),
            Token::Comma(inner) => inner.position.clone(),
            Token::Star(inner) => inner.position.clone(),
            Token::Ampersand(inner) => inner.position.clone(),
            Token::LBracket(inner) => inner.position.clone(),
            Token::RBracket(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Const(_) => "'const'".to_string(),
            Token::True(_) => "'true'".to_string(),
            Token::False(_) => "'false'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Integer(inner) => format!("integer '{}'", inner.value),
            Token::CharLiteral(inner) => format!("character {}", inner.value),
            Token::LAngle(_) => "'<'".to_string(),
            Token::RAngle(_) => "'>'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::Star(_) => "'*'".to_string(),
            Token::Ampersand(_) => "'&'".to_string(),
            Token::LBracket(_) => "'['".to_string(),
            Token::RBracket(_) => "']'".to_string(),
        }
    }
}
