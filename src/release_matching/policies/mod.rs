mod product_lexicon;

pub use product_lexicon::ProductLexicon;
