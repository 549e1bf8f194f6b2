use std::fmt;

/// Kinds of legal process a record can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessType {
    Civil,
    Penal,
    Trabalhista,
    Previdenciario,
    Consumidor,
    Dpvat,
    AssessoriaEmpresarial,
    AssessoriaPolitica,
}

impl ProcessType {
    pub const ALL: [ProcessType; 8] = [
        ProcessType::Civil,
        ProcessType::Penal,
        ProcessType::Trabalhista,
        ProcessType::Previdenciario,
        ProcessType::Consumidor,
        ProcessType::Dpvat,
        ProcessType::AssessoriaEmpresarial,
        ProcessType::AssessoriaPolitica,
    ];

    /// Label stored in the data file
    pub fn label(&self) -> &'static str {
        match self {
            ProcessType::Civil => "Civil",
            ProcessType::Penal => "Penal",
            ProcessType::Trabalhista => "Trabalhista",
            ProcessType::Previdenciario => "Previdenciário",
            ProcessType::Consumidor => "Consumidor",
            ProcessType::Dpvat => "Dpvat",
            ProcessType::AssessoriaEmpresarial => "Assessoria empresarial",
            ProcessType::AssessoriaPolitica => "Assessoria política",
        }
    }

    /// ASCII spelling accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            ProcessType::Civil => "civil",
            ProcessType::Penal => "penal",
            ProcessType::Trabalhista => "trabalhista",
            ProcessType::Previdenciario => "previdenciario",
            ProcessType::Consumidor => "consumidor",
            ProcessType::Dpvat => "dpvat",
            ProcessType::AssessoriaEmpresarial => "assessoria-empresarial",
            ProcessType::AssessoriaPolitica => "assessoria-politica",
        }
    }

    /// Helper: convert user input (label or slug, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        let wanted = code.trim().to_lowercase();
        ProcessType::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase() == wanted || t.slug() == wanted)
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
