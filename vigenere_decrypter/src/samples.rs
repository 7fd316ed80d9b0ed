//! Built-in sample ciphertexts, selectable by id from the command line
//!
//! Ids 1 to 7 are the classic exercise set (French reference, the sixth is
//! an unencrypted French passage and the seventh is too short to analyze).
//! Ids 8 and 9 are prose encrypted with `LEMON` and `MYKEY`.

use crate::Language;

/// A ciphertext and the language of its plaintext.
pub struct Sample {
    pub ciphertext: &'static str,
    pub language: Language,
}

const SAMPLES: &[Sample] = &[
    Sample {
        ciphertext: EXERCISE_1,
        language: Language::French,
    },
    Sample {
        ciphertext: EXERCISE_2,
        language: Language::French,
    },
    Sample {
        ciphertext: EXERCISE_3,
        language: Language::French,
    },
    Sample {
        ciphertext: EXERCISE_4,
        language: Language::French,
    },
    Sample {
        ciphertext: EXERCISE_5,
        language: Language::French,
    },
    Sample {
        ciphertext: FRENCH_PLAINTEXT,
        language: Language::French,
    },
    Sample {
        ciphertext: TOO_SHORT,
        language: Language::French,
    },
    Sample {
        ciphertext: SAMPLE_ENGLISH,
        language: Language::English,
    },
    Sample {
        ciphertext: SAMPLE_FRENCH,
        language: Language::French,
    },
];

/// Looks up a sample by its 1-based id.
pub fn sample(id: usize) -> Option<&'static Sample> {
    id.checked_sub(1).and_then(|i| SAMPLES.get(i))
}

/// Number of built-in samples.
pub fn count() -> usize {
    SAMPLES.len()
}

const EXERCISE_1: &str = "zbpuevpuqsdlzgllksousvpasfpddggaqwptdgptzweemqzrdjtddefekeferdprrcyndgluaowcnbptzzzrbvps\
    sfpashpncotemhaeqrferdlrlwwertlussfikgoeuswotfdgqsyasrlnrzppdhtticfrciwurhcezrpmhtpuwiye\
    namrdbzyzwelzucamrptzqseqcfgdrfrhrpatsepzgfnaffisbpvblisrplzgnemswaqoxpdseehbeeksdptdttq\
    sdddgxurwnidbdddplncsd";

const EXERCISE_2: &str = "gmyxzoocxziancxktanmyolupjrztgxwshctzluibuicyzwxyqtvqxzukibkotuxkagbknmimmzzyajvjzampqyz\
    loinoiqknaumbknknvkaiakgwtnilvvzvqydmvjcximrvzkilxzqtomrgqmdjrzyazvzmmyjgkoaknkuiaivknvv\
    y";

const EXERCISE_3: &str = "iefomntuohenwfwsjbsfftpgsnmhzsbbizaomosiuxycqaelrwsklqzekjvwsivijmhuvasmvwjewlzgubzlavcl\
    hgmuhwhakookakkgmrelgeefvwjelksedtyhsgghbamiyweeljcemxsohlnzujagkshakawwdxzcmvkhuwswlqwt\
    mlshojbsguelgsumlijsmlbsixuhsdbysdaolfatxzofstszwryhwjenuhgukwzmshbagigzzgnzhzsbtzhalelo\
    smlasjdttqzeswwwrklfguzl";

const EXERCISE_4: &str = "MOMUDEKAPVTQEFMOEVHPAJMIICDCTIFGYAGJSPXYALUYMNSMYHVUXJELEPXJFXGCMJHKDZRYICUHYPUSPGIGMOIY\
    HFWHTCQKMLRDITLXZLJFVQGHOLWCUHLOMDSOEKTALUVYLNZRFGBXPHVGALWQISFGRPHJOOFWGUBYILAPLALCAFAA\
    MKLGCETDWVOELJIKGJBXPHVGALWQCSNWBUBYHCUHKOCEXJEYKBQKVYKIIEHGRLGHXEOLWAWFOJILOVVRHPKDWIHK\
    NATUHNVRYAQDIVHXFHRZVQWMWVLGSHNNLVZSJLAKIFHXUFXJLXMTBLQVRXXHRFZXGVLRAJIEXPRVOSMNPKEPDTLP\
    RWMJAZPKLQUZAALGZXGVLKLGJTUIITDSUREZXJERXZSHMPSTMTEOEPAPJHSMFNBYVQUZAALGAYDNMPAQOWTUHDBV\
    TSMUEUIMVHQGVRWAEFSPEMPVEPKXZYWLKJAGWALTVYYOBYIXOKIHPDSEVLEVRVSGBJOGYWFHKBLGLXYAMVKISKIE\
    HYIMAPXUOISKPVAGNMZHPWTTZPVXFCCDTUHJHWLAPFYULTBUXJLNSIJVVYOVDJSOLXGTGRVOSFRIICTMKOJFCQFK\
    TINQBWVHGTENLHHOGCSPSFPVGJOKMSIFPRZPAASATPTZFTPPDPORRFTAXZPKALQAWMIUDBWNCTLEFKOZQDLXBUXJ\
    LASIMRPNMBFZCYLVWAPVFQRHZVZGZEFKBYIOOFXYEVOWGBBXVCBXBAWGLQKCMICRRXMACUOIKHQUAJEGLOIJHHXP\
    VZWJEWBAFWAMLZZRXJEKAHVFASMULVVUTTGK";

const EXERCISE_5: &str = "BPSRAUNOHCWCBGITMPJQFMEXCXYCIAGPSXCPSXWWEROQCOPITRAEBENTGAYCPMSXPQNYWCDQEVJMAVIDQRZEQESB\
    PCEWCXCYCVYGYCWI";

const FRENCH_PLAINTEXT: &str = "la Declaration des droits avait un grand nombre de partisans et quelques adversaires ; \
    tous avaient raison et elle etait à la fois necessaire et dangereuse ; necessaire pour \
    marcher suivant l'ordre des idees politiques ; dangereuse pour le peuple qui se meprend \
    facilement et qui ne sait pas qu'il n'y a point de droits sans devoirs ; que pour jouir \
    des uns, il faut se soumettre aux autres. Il en devait naitre une infinite de \
    pretentions";

const TOO_SHORT: &str = "GZGT";

const SAMPLE_ENGLISH: &str = "Elq ehtgw pezaz tbi ngacd shse elq znkc pct. Tx iof l fdwtsx ocyo qafatrs wa elq vncfaie \
    esib, nyh fvr qmevrcqqb jpvq oycimrl segzvyk fvrtv zsgd szhb elq ggzrq ehlc ivvwi fvr \
    ryxzf nmdqyph ajrclqoq. Ysncqj mz hup zuzylkq qbfpp frxiyprc e iwaeid of wszu nd xtwf \
    zrq; hup wzcj sep oecmhsq mircep xts ulvhsfe amg struguph mbq tx ehvwp xol tr fvr qmqzqd \
    fqgvoi fvr cmhse. Elq cyo puuuelaifp oqscpv ioyvip rbhr fvr smxz rgidm qlc fc ofc nfrlh \
    mbq es tsnc xts apae tezq fvr dludf elmh plqq wa qvaa gsi zceel. Ts ytoqr gz wmm gsef \
    hup wqo nwammf esxr gsi ffhel fc gsses jss isep tmhvprf sazysv gz puggpr, mbq elmh n \
    nedssfp dsnoid cs elq krlxtse hsgzq yihse mi oohrlf pl dyddetwq. Wa elq oseidbbzr fvr \
    nluzqciz unelqfro ef hup wovbzp nm gsi ovhcgt, kupvq hupmd hrlgtse cimr gsiy ggzvusf \
    lfaig pbbzbcidg jss toq nvagfph fvr rvqog oieseew mbq xsgbglmzg bq xts jzvxr vy wqoenl \
    at szvscgeiz qvemqg nyh twqoiz hepeeiep.";

const SAMPLE_FRENCH: &str = "Xc zvgzastc pc Uipoirsdrq kjdupwi ogc ve qqaevgfc n'yl ewcxcyc ni atgpjpqkorr zc nsgf \
    potmecb usq qev jq qogpqr ni jm avid qr xsl esb gcxss hc x'yvkmdgdlkq. Ye hgj-loytucwi \
    qucmpc, xcc qgxgdegdcc jpmlmege sdmjuqkmczr oraapo hce koxfabow bq armdrpoqczr zep \
    eslwrurexgal ayc xcc gpkndsjaeeiq eyfegqld hcvy meqecb kpmao e j'mlkpwec niq rpousqlmiq. \
    Pyxw szc velsso gmyko pc rpkramgc, py xcdxpq C ktnmpkmr nckyaasz tjgq csshcxx ogc viq \
    msdvce, qemtuc zep xcc pcfrbiq M, Q, S ir Z, cd gcfro vcssvepuro tcdkox bq poxpasfip xy \
    mpcr jyvqcso pc fchxc ofsjddc owr espjgeywqczr vsls nyyp cso pce qderuqdmogcc wmucxx \
    duylpce.";
