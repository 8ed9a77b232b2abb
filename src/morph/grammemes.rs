use serde::{Deserialize, Serialize};

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(untagged)]
pub enum Grammem {
    /// Часть речи
    ParteSpeech(ParteSpeech),
    /// Одушевленность
    Animacy(Animacy),
    /// Вид: Совершенный (true), несовершенный (false) вид
    Aspect(Aspect),
    /// Падеж
    Case(Case),
    Gender(Gender),
    /// Включенность говорящего в действие
    Involvement(Involvement),
    /// Наклонение: повелительное, изъявительное
    Mood(Mood),
    /// Лицо: единственное, множественное
    Number(Number),
    /// Переходный (true), непереходный (false)
    Trans(Transitivity),
    /// Время
    Tense(Tense),
    /// Залог
    Voice(Voice),
    /// Категория лица
    Person(Person),
    Other(Other),
}

impl Grammem {
    pub fn pos(&self) -> Option<ParteSpeech> {
        match self {
            Grammem::ParteSpeech(p) => Some(p.to_owned()),
            _ => None,
        }
    }

    pub fn pos_in_tag(vec: &[Self]) -> Option<ParteSpeech> {
        vec.iter().find_map(|t| t.pos())
    }

    /// Latin grammeme code, identical to the string used for serde (de)serialization
    /// and to pymorphy2/OpenCorpora gramtab entries.
    pub fn latin(&self) -> &'static str {
        match self {
            Grammem::ParteSpeech(v) => v.latin(),
            Grammem::Animacy(v) => v.latin(),
            Grammem::Aspect(v) => v.latin(),
            Grammem::Case(v) => v.latin(),
            Grammem::Gender(v) => v.latin(),
            Grammem::Involvement(v) => v.latin(),
            Grammem::Mood(v) => v.latin(),
            Grammem::Number(v) => v.latin(),
            Grammem::Trans(v) => v.latin(),
            Grammem::Tense(v) => v.latin(),
            Grammem::Voice(v) => v.latin(),
            Grammem::Person(v) => v.latin(),
            Grammem::Other(v) => v.latin(),
        }
    }

    /// Cyrillic gloss for the grammeme, used by `cyr2lat`/`lat2cyr`.
    pub fn cyrillic(&self) -> &'static str {
        match self {
            Grammem::ParteSpeech(v) => v.cyrillic(),
            Grammem::Animacy(v) => v.cyrillic(),
            Grammem::Aspect(v) => v.cyrillic(),
            Grammem::Case(v) => v.cyrillic(),
            Grammem::Gender(v) => v.cyrillic(),
            Grammem::Involvement(v) => v.cyrillic(),
            Grammem::Mood(v) => v.cyrillic(),
            Grammem::Number(v) => v.cyrillic(),
            Grammem::Trans(v) => v.cyrillic(),
            Grammem::Tense(v) => v.cyrillic(),
            Grammem::Voice(v) => v.cyrillic(),
            Grammem::Person(v) => v.cyrillic(),
            Grammem::Other(v) => v.cyrillic(),
        }
    }

    /// Parent grammeme category this grammeme belongs to, used by `updated_grammemes`
    /// to replace at most one grammeme per category.
    pub fn category(&self) -> GrammemeCategory {
        match self {
            Grammem::ParteSpeech(_) => GrammemeCategory::ParteSpeech,
            Grammem::Animacy(_) => GrammemeCategory::Animacy,
            Grammem::Aspect(_) => GrammemeCategory::Aspect,
            Grammem::Case(_) => GrammemeCategory::Case,
            Grammem::Gender(_) => GrammemeCategory::Gender,
            Grammem::Involvement(_) => GrammemeCategory::Involvement,
            Grammem::Mood(_) => GrammemeCategory::Mood,
            Grammem::Number(_) => GrammemeCategory::Number,
            Grammem::Trans(_) => GrammemeCategory::Trans,
            Grammem::Tense(_) => GrammemeCategory::Tense,
            Grammem::Voice(_) => GrammemeCategory::Voice,
            Grammem::Person(_) => GrammemeCategory::Person,
            Grammem::Other(_) => GrammemeCategory::Other,
        }
    }
}

/// Mutually exclusive grammeme families. At most one grammeme of a given
/// category can be present in a well-formed tag, except `Other`, which is
/// a bag of independent flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GrammemeCategory {
    ParteSpeech,
    Animacy,
    Aspect,
    Case,
    Gender,
    Involvement,
    Mood,
    Number,
    Trans,
    Tense,
    Voice,
    Person,
    Other,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
pub enum ParteSpeech {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "ADJF")]
    /// Имя прилагательное в полной форме
    AdjectiveFull,
    #[serde(rename = "ADJS")]
    /// Имя прилагательное в краткой форме
    AdjectiveShort,
    #[serde(rename = "COMP")]
    /// Компаратив
    Comparative,
    #[serde(rename = "VERB")]
    /// Глагол, личная форма
    Verb,
    #[serde(rename = "INFN")]
    /// Глагол, инфинитив
    Infinitive,
    #[serde(rename = "PRTF")]
    /// Причастие полное
    ParticipleFull,
    #[serde(rename = "PRTS")]
    /// Причастие краткое
    ParticipleShort,
    #[serde(rename = "GRND")]
    Gerundive,
    #[serde(rename = "NUMR")]
    Number,
    #[serde(rename = "ADVB")]
    /// Наречие
    Adverb,
    #[serde(rename = "NPRO")]
    /// Местоимение-существительное
    NounPronoun,
    #[serde(rename = "PRED")]
    /// Предикатив
    Predicative,
    #[serde(rename = "PREP")]
    /// Предлог
    Preposition,
    #[serde(rename = "CONJ")]
    /// Союз
    Conjunction,
    #[serde(rename = "PRCL")]
    /// Частица
    Particle,
    #[serde(rename = "INTJ")]
    /// Междометие
    Interjection,
    #[serde(rename = "NUMB")]
    /// Число (цифрами)
    NumberToken,
    #[serde(rename = "ROMN")]
    /// Римское число
    RomanNumberToken,
    #[serde(rename = "LATN")]
    /// Слово, состоящее из латинских букв
    LatinToken,
    #[serde(rename = "PNCT")]
    /// Знак пунктуации
    PunctuationToken,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Person {
    #[serde(rename = "1per")]
    First,
    #[serde(rename = "2per")]
    Second,
    #[serde(rename = "3per")]
    Third,
    #[serde(rename = "Impe")]
    Impersonal,
    #[serde(rename = "Impx")]
    PossibleImpersonal,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Animacy {
    #[serde(rename = "anim")]
    Animate,
    #[serde(rename = "inan")]
    Inanimate,
    /// Может использоваться как одуш. / неодуш. 
    #[serde(rename = "Inmx")]
    Both,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Aspect {
    #[serde(rename = "perf")]
    /// Совершенный
    Perfetto,
    #[serde(rename = "impf")]
    /// Несовершенный
    Imperfetto,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Number {
    #[serde(rename = "sing")]
    Singular,
    #[serde(rename = "plur")]
    Plural,
    #[serde(rename = "Sgtm")]
    /// Всегда используется в единственном числе
    SingulariaTantum,
    /// Всегда используется в множественном числе
    #[serde(rename = "Pltm")]
    PluraliaTantum,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Transitivity {
    #[serde(rename = "tran")]
    /// Переходный
    Transitive,
    #[serde(rename = "intr")]
    /// Непереходный
    Intransitive,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Tense {
    #[serde(rename = "past")]
    Past,
    #[serde(rename = "pres")]
    Present,
    #[serde(rename = "futr")]
    Future,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Default, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Case {
    // Неизменяемое
    #[serde(rename = "Fixd")]
    Fixed,
    // Именительный
    #[default]
    #[serde(rename = "nomn")]
    Nominativus,
    // Родительный
    #[serde(rename = "gent")]
    // Следующее приведение используется в Pymorphy2.
    #[serde(alias = "gen1")]
    Genetivus,
    // Дательный
    #[serde(rename = "datv")]
    Dativus,
    // Винительный
    #[serde(rename = "accs")]
    // Следующее приведение используется в Pymorphy2.
    #[serde(alias = "acc1")]
    Accusativus,
    // Творительный
    #[serde(rename = "ablt")]
    Ablativus,
    // Предложный
    #[serde(rename = "loct")]
    // Следующее приведение используется в Pymorphy2.
    #[serde(alias = "loc1")]
    Locativus,
    // Звательный
    #[serde(rename = "voct")]
    Vocativus,

    #[serde(rename = "gen2")]
    Gen2,
    #[serde(rename = "acc2")]
    Acc2,
    #[serde(rename = "loc2")]
    Loc2,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
#[allow(clippy::enum_variant_names)]
pub enum Gender {
    #[serde(rename = "masc")]
    Masculine,
    #[serde(rename = "femn")]
    Feminine,
    #[serde(rename = "neut")]
    Neutral,
    /// Общий род (м/ж),
    #[serde(rename = "ms-f")]
    Common,
    /// Колебание по роду (м/ж/с): кофе, вольво
    #[serde(rename = "Ms-f")]
    CommonWavering,
    /// Род / род не выражен
    #[serde(rename = "GNdr")]
    GenderNeutral,

}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Mood {
    #[serde(rename = "indc")]
    // Изъяснительное
    Indicativo,
    #[serde(rename = "impr")]
    // Повелительное
    Imperativo,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Voice {
    #[serde(rename = "actv")]
    // Действительный
    Active,
    #[serde(rename = "pssv")]
    // Страдательный
    Passive,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
pub enum Involvement {
    #[serde(rename = "incl")]
    /// Говорящий включен в действие
    Incluso,
    #[serde(rename = "excl")]
    /// Говорящий не включен в действие
    Excluso,
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0.display())]
#[serde(rename = "$value")]
#[allow(clippy::enum_variant_names)]
pub enum Other {
    /// Аббревиатура
    #[serde(rename = "Abbr")]
    Abbreviation,
    #[serde(rename = "Name")]
    Name,
    #[serde(rename = "Surn")]
    Surname,
    #[serde(rename = "Patr")]
    Patronymic,
    #[serde(rename = "Geox")]
    Geography,
    #[serde(rename = "Orgn")]
    Organization,
    #[serde(rename = "Trad")]
    Trademark,

    /// Возможно субстантивация
    #[serde(rename = "Subx")]
    PossibleSubstantive,
    /// Превосходная степень
    #[serde(rename = "Supr")]
    Superior,
    /// Качественное
    #[serde(rename = "Qual")]
    Quality,
    /// Местоименное
    #[serde(rename = "Apro")]
    Pronominal,
    /// Порядковое
    #[serde(rename = "Anum")]
    Ordinal,
    /// Притяжательное
    #[serde(rename = "Poss")]
    Possessive,
    /// Вопросительное
    #[serde(rename = "Ques")]
    Questionable,
    /// Указательное
    #[serde(rename = "Dmns")]
    Demonstrative,
    /// Анафорическое (местоимение)
    #[serde(rename = "Anph")]
    Anaphoric,

    /// Сравнительная степень на по-
    #[serde(rename = "Cmp2")]
    Comparative,
    /// Форма на еею
    #[serde(rename = "V-ey")]
    FormEY,
    /// Форма на еою
    #[serde(rename = "V-oy")]
    FormOY,
    /// Форма на -ей
    #[serde(rename = "V-ej")]
    FormEJ,
    /// Форма на -ье
    #[serde(rename = "V-be")]
    FormBE,
    /// Форма на -енен
    #[serde(rename = "V-en")]
    FormENEN,
    /// Форма на -и- (веселие, твердостию); отчество с -ие
    #[serde(rename = "V-ie")]
    FormIE,
    /// Форма на -ьи
    #[serde(rename = "V-bi")]
    FormBI,
    /// деепричастие на -ши
    #[serde(rename = "V-sh")]
    ParticipleSH,    

    /// Многократный
    #[serde(rename = "Mult")]
    Multiple,
    /// Возвратный
    #[serde(rename = "Refl")]
    Reflessivo,
    /// Разговорное
    #[serde(rename = "Infr")]
    Spoken,
    /// жаргонное
    #[serde(rename = "Slng")]
    Slang,
    /// Устаревшее
    #[serde(rename = "Arch")]
    Archaic,
    /// Литературный вариант
    #[serde(rename = "Litr")]
    Literary,
    /// Опечатка
    #[serde(rename = "Erro")]
    Error,
    /// Искажение
    #[serde(rename = "Dist")]
    Distortion,
    /// Вводное слово
    #[serde(rename = "Prnt")]
    Parenthesis,
    /// деепричастие от глагола несовершенного вида
    #[serde(rename = "Fimp")]
    ImperfectiveParticiple,
    /// может выступать в роли предикатива
    #[serde(rename = "Prdx")]
    PossiblePredicative,
    /// счётная форма
    #[serde(rename = "Coun")]
    Countable,
    /// Собирательное числительное
    #[serde(rename = "Coll")]
    Collection,
    /// Форма после предлога
    #[serde(rename = "Af-p")]
    AfterPreposition,
    /// Вариант предлога ( со, подо, ...)
    #[serde(rename = "Vpre")]
    PrepositionVariant,
    /// Инициал
    #[serde(rename = "Init")]
    Initial,
    /// Может выступать в роли прилагательного
    #[serde(rename = "Adjx")]
    PossibleAdjective,    
    /// Гипотетическая форма слова (победю, асфальтовее)
    #[serde(rename = "Hypo")]
    Hypothetical,
    #[serde(other)]
    Other,
}

impl ParteSpeech {
    pub fn latin(&self) -> &'static str {
        match self {
            ParteSpeech::Noun => "NOUN",
            ParteSpeech::AdjectiveFull => "ADJF",
            ParteSpeech::AdjectiveShort => "ADJS",
            ParteSpeech::Comparative => "COMP",
            ParteSpeech::Verb => "VERB",
            ParteSpeech::Infinitive => "INFN",
            ParteSpeech::ParticipleFull => "PRTF",
            ParteSpeech::ParticipleShort => "PRTS",
            ParteSpeech::Gerundive => "GRND",
            ParteSpeech::Number => "NUMR",
            ParteSpeech::Adverb => "ADVB",
            ParteSpeech::NounPronoun => "NPRO",
            ParteSpeech::Predicative => "PRED",
            ParteSpeech::Preposition => "PREP",
            ParteSpeech::Conjunction => "CONJ",
            ParteSpeech::Particle => "PRCL",
            ParteSpeech::Interjection => "INTJ",
            ParteSpeech::NumberToken => "NUMB",
            ParteSpeech::RomanNumberToken => "ROMN",
            ParteSpeech::LatinToken => "LATN",
            ParteSpeech::PunctuationToken => "PNCT",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            ParteSpeech::Noun => "СУЩ",
            ParteSpeech::AdjectiveFull => "ПРИЛ",
            ParteSpeech::AdjectiveShort => "КР_ПРИЛ",
            ParteSpeech::Comparative => "КОМП",
            ParteSpeech::Verb => "ГЛ",
            ParteSpeech::Infinitive => "ИНФ",
            ParteSpeech::ParticipleFull => "ПРИЧ",
            ParteSpeech::ParticipleShort => "КР_ПРИЧ",
            ParteSpeech::Gerundive => "ДЕЕПР",
            ParteSpeech::Number => "ЧИСЛ",
            ParteSpeech::Adverb => "НАРЕЧ",
            ParteSpeech::NounPronoun => "МС",
            ParteSpeech::Predicative => "ПРЕДК",
            ParteSpeech::Preposition => "ПР",
            ParteSpeech::Conjunction => "СОЮЗ",
            ParteSpeech::Particle => "ЧАСТ",
            ParteSpeech::Interjection => "МЕЖД",
            ParteSpeech::NumberToken => "ЧИСЛО",
            ParteSpeech::RomanNumberToken => "РИМ_ЧИСЛО",
            ParteSpeech::LatinToken => "ЛАТ",
            ParteSpeech::PunctuationToken => "ЗПР",
        }
    }
}

impl Person {
    pub fn latin(&self) -> &'static str {
        match self {
            Person::First => "1per",
            Person::Second => "2per",
            Person::Third => "3per",
            Person::Impersonal => "Impe",
            Person::PossibleImpersonal => "Impx",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Person::First => "1-Л",
            Person::Second => "2-Л",
            Person::Third => "3-Л",
            Person::Impersonal => "БЕЗЛ",
            Person::PossibleImpersonal => "БЕЗЛ?",
        }
    }
}

impl Animacy {
    pub fn latin(&self) -> &'static str {
        match self {
            Animacy::Animate => "anim",
            Animacy::Inanimate => "inan",
            Animacy::Both => "Inmx",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Animacy::Animate => "од",
            Animacy::Inanimate => "неод",
            Animacy::Both => "од/неод",
        }
    }
}

impl Aspect {
    pub fn latin(&self) -> &'static str {
        match self {
            Aspect::Perfetto => "perf",
            Aspect::Imperfetto => "impf",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Aspect::Perfetto => "сов",
            Aspect::Imperfetto => "несов",
        }
    }
}

impl Number {
    pub fn latin(&self) -> &'static str {
        match self {
            Number::Singular => "sing",
            Number::Plural => "plur",
            Number::SingulariaTantum => "Sgtm",
            Number::PluraliaTantum => "Pltm",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Number::Singular => "ед",
            Number::Plural => "мн",
            Number::SingulariaTantum => "sg_tant",
            Number::PluraliaTantum => "pl_tant",
        }
    }
}

impl Transitivity {
    pub fn latin(&self) -> &'static str {
        match self {
            Transitivity::Transitive => "tran",
            Transitivity::Intransitive => "intr",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Transitivity::Transitive => "перех",
            Transitivity::Intransitive => "неперех",
        }
    }
}

impl Tense {
    pub fn latin(&self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present => "pres",
            Tense::Future => "futr",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Tense::Past => "прош",
            Tense::Present => "наст",
            Tense::Future => "буд",
        }
    }
}

impl Case {
    pub fn latin(&self) -> &'static str {
        match self {
            Case::Fixed => "Fixd",
            Case::Nominativus => "nomn",
            Case::Genetivus => "gent",
            Case::Dativus => "datv",
            Case::Accusativus => "accs",
            Case::Ablativus => "ablt",
            Case::Locativus => "loct",
            Case::Vocativus => "voct",
            Case::Gen2 => "gen2",
            Case::Acc2 => "acc2",
            Case::Loc2 => "loc2",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Case::Fixed => "0",
            Case::Nominativus => "им",
            Case::Genetivus => "рд",
            Case::Dativus => "дт",
            Case::Accusativus => "вн",
            Case::Ablativus => "тв",
            Case::Locativus => "пр",
            Case::Vocativus => "зв",
            Case::Gen2 => "рд2",
            Case::Acc2 => "вн2",
            Case::Loc2 => "пр2",
        }
    }
}

impl Gender {
    pub fn latin(&self) -> &'static str {
        match self {
            Gender::Masculine => "masc",
            Gender::Feminine => "femn",
            Gender::Neutral => "neut",
            Gender::Common => "ms-f",
            Gender::CommonWavering => "Ms-f",
            Gender::GenderNeutral => "GNdr",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Gender::Masculine => "мр",
            Gender::Feminine => "жр",
            Gender::Neutral => "ср",
            Gender::Common => "мж",
            Gender::CommonWavering => "мж?",
            Gender::GenderNeutral => "0",
        }
    }
}

impl Mood {
    pub fn latin(&self) -> &'static str {
        match self {
            Mood::Indicativo => "indc",
            Mood::Imperativo => "impr",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Mood::Indicativo => "изъяв",
            Mood::Imperativo => "пов",
        }
    }
}

impl Voice {
    pub fn latin(&self) -> &'static str {
        match self {
            Voice::Active => "actv",
            Voice::Passive => "pssv",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Voice::Active => "действ",
            Voice::Passive => "страд",
        }
    }
}

impl Involvement {
    pub fn latin(&self) -> &'static str {
        match self {
            Involvement::Incluso => "incl",
            Involvement::Excluso => "excl",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Involvement::Incluso => "вкл",
            Involvement::Excluso => "выкл",
        }
    }
}

impl Other {
    pub fn latin(&self) -> &'static str {
        match self {
            Other::Abbreviation => "Abbr",
            Other::Name => "Name",
            Other::Surname => "Surn",
            Other::Patronymic => "Patr",
            Other::Geography => "Geox",
            Other::Organization => "Orgn",
            Other::Trademark => "Trad",
            Other::PossibleSubstantive => "Subx",
            Other::Superior => "Supr",
            Other::Quality => "Qual",
            Other::Pronominal => "Apro",
            Other::Ordinal => "Anum",
            Other::Possessive => "Poss",
            Other::Questionable => "Ques",
            Other::Demonstrative => "Dmns",
            Other::Anaphoric => "Anph",
            Other::Comparative => "Cmp2",
            Other::FormEY => "V-ey",
            Other::FormOY => "V-oy",
            Other::FormEJ => "V-ej",
            Other::FormBE => "V-be",
            Other::FormENEN => "V-en",
            Other::FormIE => "V-ie",
            Other::FormBI => "V-bi",
            Other::ParticipleSH => "V-sh",
            Other::Multiple => "Mult",
            Other::Reflessivo => "Refl",
            Other::Spoken => "Infr",
            Other::Slang => "Slng",
            Other::Archaic => "Arch",
            Other::Literary => "Litr",
            Other::Error => "Erro",
            Other::Distortion => "Dist",
            Other::Parenthesis => "Prnt",
            Other::ImperfectiveParticiple => "Fimp",
            Other::PossiblePredicative => "Prdx",
            Other::Countable => "Coun",
            Other::Collection => "Coll",
            Other::AfterPreposition => "Af-p",
            Other::PrepositionVariant => "Vpre",
            Other::Initial => "Init",
            Other::PossibleAdjective => "Adjx",
            Other::Hypothetical => "Hypo",
            Other::Other => "Other",
        }
    }

    pub fn cyrillic(&self) -> &'static str {
        match self {
            Other::Abbreviation => "аббр",
            Other::Name => "имя",
            Other::Surname => "фам",
            Other::Patronymic => "отч",
            Other::Geography => "гео",
            Other::Organization => "орг",
            Other::Trademark => "товар",
            Other::PossibleSubstantive => "субст?",
            Other::Superior => "превосх",
            Other::Quality => "кач",
            Other::Pronominal => "местн",
            Other::Ordinal => "поряд",
            Other::Possessive => "притяж",
            Other::Questionable => "вопрос",
            Other::Demonstrative => "указ",
            Other::Anaphoric => "анаф",
            Other::Comparative => "сравн2",
            Other::FormEY => "форма_еею",
            Other::FormOY => "форма_еою",
            Other::FormEJ => "форма_ей",
            Other::FormBE => "форма_ье",
            Other::FormENEN => "форма_енен",
            Other::FormIE => "форма_и",
            Other::FormBI => "форма_ьи",
            Other::ParticipleSH => "форма_ши",
            Other::Multiple => "многокр",
            Other::Reflessivo => "возвр",
            Other::Spoken => "разг",
            Other::Slang => "жарг",
            Other::Archaic => "устар",
            Other::Literary => "лит",
            Other::Error => "опечатка",
            Other::Distortion => "искаж",
            Other::Parenthesis => "вводн",
            Other::ImperfectiveParticiple => "деепр_несов",
            Other::PossiblePredicative => "предк?",
            Other::Countable => "счетн",
            Other::Collection => "собир",
            Other::AfterPreposition => "после_предл",
            Other::PrepositionVariant => "вар_предл",
            Other::Initial => "иниц",
            Other::PossibleAdjective => "прил?",
            Other::Hypothetical => "гипот",
            Other::Other => "прочее",
        }
    }
}
