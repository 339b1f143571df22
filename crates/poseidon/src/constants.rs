//! Embedded Poseidon parameters
//!
//! Per-width tables for the deployed parameterisation: for state width t,
//! the round-constant table C_t holds t constants per round (applied as
//! C[r*t + i] to state slot i) and MDS_t is the t-by-t mixing matrix.
//! These are not the circomlib/grain tables; the deployed values come from
//! hash-to-field chains of BLAKE2b-256 over domain-separated ASCII seeds.
//! Element i of a chain is the little-endian integer of the i-th iterated
//! digest reduced mod Q. The chain seeded `poseidon_constants` yields one
//! fresh element per round, broadcast across the t slots of that round;
//! the width-t MDS matrix is the Cauchy matrix
//! M[i][j] = (c[i] - c[t + j])^-1 over 2t elements of the
//! `poseidon_matrix_0000` chain. The tests at the bottom re-derive every
//! embedded value from the seeds and pin the lineage against a fixture of
//! the schedule that predates the deployed one.

use ark_bn254::Fr as Fq;
use ark_ff::MontFp;

/// Number of full rounds, split evenly around the partial rounds.
pub const N_ROUNDS_F: usize = 6;

/// Number of partial rounds, indexed by state width minus two.
pub const N_ROUNDS_P: [usize; 6] = [53, 53, 52, 52, 52, 52];

/// Largest supported number of hash inputs.
pub const MAX_INPUTS: usize = 6;

/// Round constants for state width 2: 2 per round for 59 rounds.
const C_2: [Fq; 118] = [
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("19908645952733301583346063785055921934459499091029406575311417879963332475861"),
    MontFp!("19908645952733301583346063785055921934459499091029406575311417879963332475861"),
];

/// Round constants for state width 3: 3 per round for 59 rounds.
const C_3: [Fq; 177] = [
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("19908645952733301583346063785055921934459499091029406575311417879963332475861"),
    MontFp!("19908645952733301583346063785055921934459499091029406575311417879963332475861"),
    MontFp!("19908645952733301583346063785055921934459499091029406575311417879963332475861"),
];

/// Round constants for state width 4: 4 per round for 58 rounds.
const C_4: [Fq; 232] = [
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
];

/// Round constants for state width 5: 5 per round for 58 rounds.
const C_5: [Fq; 290] = [
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
];

/// Round constants for state width 6: 6 per round for 58 rounds.
const C_6: [Fq; 348] = [
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
];

/// Round constants for state width 7: 7 per round for 58 rounds.
const C_7: [Fq; 406] = [
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("14397397413755236225575615486459253198602422701513067526754101844196324375522"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("10405129301473404666785234951972711717481302463898292859783056520670200613128"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("5179144822360023508491245509308555580251733042407187134628755730783052214509"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("9132640374240188374542843306219594180154739721841249568925550236430986592615"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("20360807315276763881209958738450444293273549928693737723235350358403012458514"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("17933600965499023212689924809448543050840131883187652471064418452962948061619"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("3636213416533737411392076250708419981662897009810345015164671602334517041153"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("2008540005368330234524962342006691994500273283000229509835662097352946198608"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("16018407964853379535338740313053768402596521780991140819786560130595652651567"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("20653139667070586705378398435856186172195806027708437373983929336015162186471"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("17887713874711369695406927657694993484804203950786446055999405564652412116765"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("4852706232225925756777361208698488277369799648067343227630786518486608711772"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("8969172011633935669771678412400911310465619639756845342775631896478908389850"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("20570199545627577691240476121888846460936245025392381957866134167601058684375"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("16442329894745639881165035015179028112772410105963688121820543219662832524136"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("20060625627350485876280451423010593928172611031611836167979515653463693899374"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("16637282689940520290130302519163090147511023430395200895953984829546679599107"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("15599196921909732993082127725908821049411366914683565306060493533569088698214"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("16894591341213863947423904025624185991098788054337051624251730868231322135455"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("1197934381747032348421303489683932612752526046745577259575778515005162320212"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("6172482022646932735745595886795230725225293469762393889050804649558459236626"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("21004037394166516054140386756510609698837211370585899203851827276330669555417"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15262034989144652068456967541137853724140836132717012646544737680069032573006"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15017690682054366744270630371095785995296470601172793770224691982518041139766"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("15159744167842240513848638419303545693472533086570469712794583342699782519832"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("11178069035565459212220861899558526502477231302924961773582350246646450941231"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("21154888769130549957415912997229564077486639529994598560737238811887296922114"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("20162517328110570500010831422938033120419484532231241180224283481905744633719"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("2777362604871784250419758188173029886707024739806641263170345377816177052018"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("15732290486829619144634131656503993123618032247178179298922551820261215487562"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("6024433414579583476444635447152826813568595303270846875177844482142230009826"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("17677827682004946431939402157761289497221048154630238117709539216286149983245"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("10716307389353583413755237303156291454109852751296156900963208377067748518748"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("14925386988604173087143546225719076187055229908444910452781922028996524347508"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("8940878636401797005293482068100797531020505636124892198091491586778667442523"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("18911747154199663060505302806894425160044925686870165583944475880789706164410"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("8821532432394939099312235292271438180996556457308429936910969094255825456935"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("20632576502437623790366878538516326728436616723089049415538037018093616927643"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("71447649211767888770311304010816315780740050029903404046389165015534756512"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("2781996465394730190470582631099299305677291329609718650018200531245670229393"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("12441376330954323535872906380510501637773629931719508864016287320488688345525"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("2558302139544901035700544058046419714227464650146159803703499681139469546006"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("10087036781939179132584550273563255199577525914374285705149349445480649057058"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4267692623754666261749551533667592242661271409704769363166965280715887854739"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("4945579503584457514844595640661884835097077318604083061152997449742124905548"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("17742335354489274412669987990603079185096280484072783973732137326144230832311"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("6266270088302506215402996795500854910256503071464802875821837403486057988208"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("2716062168542520412498610856550519519760063668165561277991771577403400784706"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("19118392018538203167410421493487769944462015419023083813301166096764262134232"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9386595745626044000666050847309903206827901310677406022353307960932745699524"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("9121640807890366356465620448383131419933298563527245687958865317869840082266"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("3078975275808111706229899605611544294904276390490742680006005661017864583210"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("7157404299437167354719786626667769956233708887934477609633504801472827442743"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14056248655941725362944552761799461694550787028230120190862133165195793034373"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("14124396743304355958915937804966111851843703158171757752158388556919187839849"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("11851254356749068692552943732920045260402277343008629727465773766468466181076"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("9799099446406796696742256539758943483211846559715874347178722060519817626047"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
    MontFp!("10156146186214948683880719664738535455146137901666656566575307300522957959544"),
];

/// MDS matrix for state width 2, row-major.
const MDS_2: [Fq; 4] = [
    MontFp!("5905559862616915807900579325651902433433685645159267419610962108431726462693"),
    MontFp!("12711080208452642132636348910936535131635469619255658927004323269777977499766"),
    MontFp!("1630059164638566989648383609786744055995088365519873639181021774367459228529"),
    MontFp!("18634098492055214324873285470566015538548967469826511946578953323931218028182"),
];

/// MDS matrix for state width 3, row-major.
const MDS_3: [Fq; 9] = [
    MontFp!("12711080208452642132636348910936535131635469619255658927004323269777977499766"),
    MontFp!("11739432287187184656569880828944421268616385874806221589758215824904320817117"),
    MontFp!("4977258759536702998522229302103997878600602264560359702680165243908162277980"),
    MontFp!("18634098492055214324873285470566015538548967469826511946578953323931218028182"),
    MontFp!("16872301185549870956030057498946148102848662396374401407323436343924021192350"),
    MontFp!("107933704346764130067829474107909495889716688591997879426350582457782826785"),
    MontFp!("10964855577711430604889230155222964616951177623752692235240949905229827667414"),
    MontFp!("18618317300596756144100783409915332163189452886691331959651778092154775572832"),
    MontFp!("13596762909635538739079656925495736900379091964739248298531655823337482778123"),
];

/// MDS matrix for state width 4, row-major.
const MDS_4: [Fq; 16] = [
    MontFp!("11739432287187184656569880828944421268616385874806221589758215824904320817117"),
    MontFp!("4977258759536702998522229302103997878600602264560359702680165243908162277980"),
    MontFp!("19167410339349846567561662441069598364702008768579734801591448511131028229281"),
    MontFp!("14183033936038168803360723133013092560869148726790180682363054735190196956789"),
    MontFp!("16872301185549870956030057498946148102848662396374401407323436343924021192350"),
    MontFp!("107933704346764130067829474107909495889716688591997879426350582457782826785"),
    MontFp!("17034139127218860091985397764514160131253018178110701196935786874261236172431"),
    MontFp!("2799255644797227968811798608332314218966179365168250111693473252876996230317"),
    MontFp!("18618317300596756144100783409915332163189452886691331959651778092154775572832"),
    MontFp!("13596762909635538739079656925495736900379091964739248298531655823337482778123"),
    MontFp!("18985203040268814769637347880759846911264240088034262814847924884273017355969"),
    MontFp!("8652975463545710606098548415650457376967119951977109072274595329619335974180"),
    MontFp!("11128168843135959720130031095451763561052380159981718940182755860433840154182"),
    MontFp!("2953507793609469112222895633455544691298656192015062835263784675891831794974"),
    MontFp!("19025623051770008118343718096455821045904242602531062247152770448380880817517"),
    MontFp!("9077319817220936628089890431129759976815127354480867310384708941479362824016"),
];

/// MDS matrix for state width 5, row-major.
const MDS_5: [Fq; 25] = [
    MontFp!("4977258759536702998522229302103997878600602264560359702680165243908162277980"),
    MontFp!("19167410339349846567561662441069598364702008768579734801591448511131028229281"),
    MontFp!("14183033936038168803360723133013092560869148726790180682363054735190196956789"),
    MontFp!("9067734253445064890734144122526450279189023719890032859456830213166173619761"),
    MontFp!("16378664841697311562845443097199265623838619398287411428110917414833007677155"),
    MontFp!("107933704346764130067829474107909495889716688591997879426350582457782826785"),
    MontFp!("17034139127218860091985397764514160131253018178110701196935786874261236172431"),
    MontFp!("2799255644797227968811798608332314218966179365168250111693473252876996230317"),
    MontFp!("2482058150180648511543788012634934806465808146786082148795902594096349483974"),
    MontFp!("16563522740626180338295201738437974404892092704059676533096069531044355099628"),
    MontFp!("13596762909635538739079656925495736900379091964739248298531655823337482778123"),
    MontFp!("18985203040268814769637347880759846911264240088034262814847924884273017355969"),
    MontFp!("8652975463545710606098548415650457376967119951977109072274595329619335974180"),
    MontFp!("970943815872417895015626519859542525373809485973005165410533315057253476903"),
    MontFp!("19406667490568134101658669326517700199745817783746545889094238643063688871948"),
    MontFp!("2953507793609469112222895633455544691298656192015062835263784675891831794974"),
    MontFp!("19025623051770008118343718096455821045904242602531062247152770448380880817517"),
    MontFp!("9077319817220936628089890431129759976815127354480867310384708941479362824016"),
    MontFp!("4770370314098695913091200576539533727214143013236894216582648993741910829490"),
    MontFp!("4298564056297802123194408918029088169104276109138370115401819933600955259473"),
    MontFp!("8336710468787894148066071988103915091676109272951895469087957569358494947747"),
    MontFp!("16205238342129310687768799056463408647672389183328001070715567975181364448609"),
    MontFp!("8303849270045876854140023508764676765932043944545416856530551331270859502246"),
    MontFp!("20218246699596954048529384569730026273241102596326201163062133863539137060414"),
    MontFp!("1712845821388089905746651754894206522004527237615042226559791118162382909269"),
];

/// MDS matrix for state width 6, row-major.
const MDS_6: [Fq; 36] = [
    MontFp!("19167410339349846567561662441069598364702008768579734801591448511131028229281"),
    MontFp!("14183033936038168803360723133013092560869148726790180682363054735190196956789"),
    MontFp!("9067734253445064890734144122526450279189023719890032859456830213166173619761"),
    MontFp!("16378664841697311562845443097199265623838619398287411428110917414833007677155"),
    MontFp!("12968540216479938138647596899147650021419273189336843725176422194136033835172"),
    MontFp!("3636162562566338420490575570584278737093584021456168183289112789616069756675"),
    MontFp!("17034139127218860091985397764514160131253018178110701196935786874261236172431"),
    MontFp!("2799255644797227968811798608332314218966179365168250111693473252876996230317"),
    MontFp!("2482058150180648511543788012634934806465808146786082148795902594096349483974"),
    MontFp!("16563522740626180338295201738437974404892092704059676533096069531044355099628"),
    MontFp!("10468644849657689537028565510142839489302836569811003546969773105463051947124"),
    MontFp!("3328913364598498171733622353010907641674136720305714432354138807013088636408"),
    MontFp!("18985203040268814769637347880759846911264240088034262814847924884273017355969"),
    MontFp!("8652975463545710606098548415650457376967119951977109072274595329619335974180"),
    MontFp!("970943815872417895015626519859542525373809485973005165410533315057253476903"),
    MontFp!("19406667490568134101658669326517700199745817783746545889094238643063688871948"),
    MontFp!("17049854690034965250221386317058877242629221002521630573756355118745574274967"),
    MontFp!("4964394613021008685803675656098849539153699842663541444414978877928878266244"),
    MontFp!("19025623051770008118343718096455821045904242602531062247152770448380880817517"),
    MontFp!("9077319817220936628089890431129759976815127354480867310384708941479362824016"),
    MontFp!("4770370314098695913091200576539533727214143013236894216582648993741910829490"),
    MontFp!("4298564056297802123194408918029088169104276109138370115401819933600955259473"),
    MontFp!("6905514380186323693285869145872115273350947784558995755916362330070690839131"),
    MontFp!("4783343257810358393326889022942241108539824540285247795235499223017138301952"),
    MontFp!("16205238342129310687768799056463408647672389183328001070715567975181364448609"),
    MontFp!("8303849270045876854140023508764676765932043944545416856530551331270859502246"),
    MontFp!("20218246699596954048529384569730026273241102596326201163062133863539137060414"),
    MontFp!("1712845821388089905746651754894206522004527237615042226559791118162382909269"),
    MontFp!("13001155522144542028910638547179410124467185319212645031214919884423841839406"),
    MontFp!("16037892369576300958623292723740289861626299352695838577330319504984091062115"),
    MontFp!("15162889384227198851506890526431746552868519326873025085114621698588781611738"),
    MontFp!("13272957914179340594010910867091459756043436017766464331915862093201960540910"),
    MontFp!("9416416589114508529880440146952102328470363729880726115521103179442988482948"),
    MontFp!("8035240799672199706102747147502951589635001418759394863664434079699838251138"),
    MontFp!("21642389080762222565487157652540372010968704000567605990102641816691459811717"),
    MontFp!("20261355950827657195644012399234591122288573679402601053407151083849785332516"),
];

/// MDS matrix for state width 7, row-major.
const MDS_7: [Fq; 49] = [
    MontFp!("14183033936038168803360723133013092560869148726790180682363054735190196956789"),
    MontFp!("9067734253445064890734144122526450279189023719890032859456830213166173619761"),
    MontFp!("16378664841697311562845443097199265623838619398287411428110917414833007677155"),
    MontFp!("12968540216479938138647596899147650021419273189336843725176422194136033835172"),
    MontFp!("3636162562566338420490575570584278737093584021456168183289112789616069756675"),
    MontFp!("8949952361235797771659501126471156178804092479420606597426318793013844305422"),
    MontFp!("13586657904816433080148729258697725609063090799921401830545410130405357110367"),
    MontFp!("2799255644797227968811798608332314218966179365168250111693473252876996230317"),
    MontFp!("2482058150180648511543788012634934806465808146786082148795902594096349483974"),
    MontFp!("16563522740626180338295201738437974404892092704059676533096069531044355099628"),
    MontFp!("10468644849657689537028565510142839489302836569811003546969773105463051947124"),
    MontFp!("3328913364598498171733622353010907641674136720305714432354138807013088636408"),
    MontFp!("8642889650254799419576843603477253661899356105675006557919250564400804756641"),
    MontFp!("14300697791556510113764686242794463641010174685800128469053974698256194076125"),
    MontFp!("8652975463545710606098548415650457376967119951977109072274595329619335974180"),
    MontFp!("970943815872417895015626519859542525373809485973005165410533315057253476903"),
    MontFp!("19406667490568134101658669326517700199745817783746545889094238643063688871948"),
    MontFp!("17049854690034965250221386317058877242629221002521630573756355118745574274967"),
    MontFp!("4964394613021008685803675656098849539153699842663541444414978877928878266244"),
    MontFp!("15474947305445649466370538888925567099067120578851553103424183520405650587995"),
    MontFp!("1016119095639665978105768933448186152078842964810837543326777554729232767846"),
    MontFp!("9077319817220936628089890431129759976815127354480867310384708941479362824016"),
    MontFp!("4770370314098695913091200576539533727214143013236894216582648993741910829490"),
    MontFp!("4298564056297802123194408918029088169104276109138370115401819933600955259473"),
    MontFp!("6905514380186323693285869145872115273350947784558995755916362330070690839131"),
    MontFp!("4783343257810358393326889022942241108539824540285247795235499223017138301952"),
    MontFp!("1420772902128122367335354247676760257656541121773854204774788519230732373317"),
    MontFp!("14172871439045259377975734198064051992755748777535789572469924335100006948373"),
    MontFp!("8303849270045876854140023508764676765932043944545416856530551331270859502246"),
    MontFp!("20218246699596954048529384569730026273241102596326201163062133863539137060414"),
    MontFp!("1712845821388089905746651754894206522004527237615042226559791118162382909269"),
    MontFp!("13001155522144542028910638547179410124467185319212645031214919884423841839406"),
    MontFp!("16037892369576300958623292723740289861626299352695838577330319504984091062115"),
    MontFp!("19189494548480259335554606182055502469831573298885662881571444557262020106898"),
    MontFp!("19032687447778391106390582750185144485341165205399984747451318330476859342654"),
    MontFp!("13272957914179340594010910867091459756043436017766464331915862093201960540910"),
    MontFp!("9416416589114508529880440146952102328470363729880726115521103179442988482948"),
    MontFp!("8035240799672199706102747147502951589635001418759394863664434079699838251138"),
    MontFp!("21642389080762222565487157652540372010968704000567605990102641816691459811717"),
    MontFp!("20261355950827657195644012399234591122288573679402601053407151083849785332516"),
    MontFp!("14514189384576734449268559374569145463190040567900950075547616936149781403109"),
    MontFp!("19038036134886073991945204537416211699632292792787812530208911676638479944765"),
    MontFp!("15627836782263662543041758927100784213807648787083018234961118439434298020664"),
    MontFp!("5655785191024506056588710805596292231240948371113351452712848652644610823632"),
    MontFp!("8265264721707292643644260517162050867559314081394556886644673791575065394002"),
    MontFp!("17151144681903609082202835646026478898625761142991787335302962548605510241586"),
    MontFp!("18731644709777529787185361516475509623264209648904603914668024590231177708831"),
    MontFp!("20697789991623248954020701081488146717484139720322034504511115160686216223641"),
    MontFp!("6200020095464686209289974437830528853749866001482481427982839122465470640886"),
];

/// The round-constant table for a given state width, laid out row-major:
/// entry r*t + i is added to state slot i in round r.
pub fn round_constants(t: usize) -> &'static [Fq] {
    match t {
        2 => &C_2,
        3 => &C_3,
        4 => &C_4,
        5 => &C_5,
        6 => &C_6,
        7 => &C_7,
        _ => unreachable!("state width {t} has no parameter set"),
    }
}

/// The MDS matrix for a given state width, flattened row-major.
pub fn mds_matrix(t: usize) -> &'static [Fq] {
    match t {
        2 => &MDS_2,
        3 => &MDS_3,
        4 => &MDS_4,
        5 => &MDS_5,
        6 => &MDS_6,
        7 => &MDS_7,
        _ => unreachable!("state width {t} has no parameter set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{Field, PrimeField, Zero};
    use blake2::digest::consts::U32;
    use blake2::{Blake2b, Digest};

    type Blake2b256 = Blake2b<U32>;

    fn field_chain(seed: &[u8], n: usize) -> Vec<Fq> {
        let mut out = Vec::with_capacity(n);
        let mut digest = Blake2b256::digest(seed);
        for _ in 0..n {
            out.push(Fq::from_le_bytes_mod_order(&digest));
            digest = Blake2b256::digest(&digest);
        }
        out
    }

    #[test]
    fn test_round_constants_match_seed_derivation() {
        for t in 2..=7 {
            let n_rounds = N_ROUNDS_F + N_ROUNDS_P[t - 2];
            let chain = field_chain(b"poseidon_constants", n_rounds);
            let embedded = round_constants(t);
            assert_eq!(embedded.len(), t * n_rounds);
            for r in 0..n_rounds {
                for i in 0..t {
                    assert_eq!(embedded[r * t + i], chain[r], "width {t} round {r} slot {i}");
                }
            }
        }
    }

    #[test]
    fn test_mds_matrices_match_seed_derivation() {
        for t in 2..=7 {
            let c = field_chain(b"poseidon_matrix_0000", 2 * t);
            let embedded = mds_matrix(t);
            for i in 0..t {
                for j in 0..t {
                    let entry = (c[i] - c[t + j])
                        .inverse()
                        .expect("chain elements are distinct");
                    assert_eq!(embedded[i * t + j], entry, "width {t} entry ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn test_seed_chains_reproduce_legacy_width6_digest() {
        // An earlier width-6 schedule (8 full rounds, 57 partial rounds,
        // zero-padded state) draws on the same two seed chains; its [1, 2]
        // digest is pinned here to anchor the derivation.
        let n_rounds = 8 + 57;
        let chain = field_chain(b"poseidon_constants", n_rounds);
        let c = field_chain(b"poseidon_matrix_0000", 12);
        let t = 6;

        let mut state = vec![Fq::zero(); t];
        state[0] = Fq::from(1u64);
        state[1] = Fq::from(2u64);
        let mut mixed = vec![Fq::zero(); t];
        for round in 0..n_rounds {
            for element in state.iter_mut() {
                *element += chain[round];
            }
            if round < 4 || round >= 4 + 57 {
                for element in state.iter_mut() {
                    let x2 = element.square();
                    *element = x2.square() * *element;
                }
            } else {
                let x2 = state[0].square();
                state[0] = x2.square() * state[0];
            }
            for (i, slot) in mixed.iter_mut().enumerate() {
                *slot = Fq::zero();
                for (j, element) in state.iter().enumerate() {
                    *slot += (c[i] - c[t + j]).inverse().unwrap() * element;
                }
            }
            state.copy_from_slice(&mixed);
        }
        assert_eq!(
            state[0],
            MontFp!(
                "12242166908188651009877250812424843524687801523336557272219921456462821518061"
            )
        );
    }

    #[test]
    fn test_schedule_fits_the_tables() {
        for t in 2..=7 {
            assert_eq!(round_constants(t).len(), t * (N_ROUNDS_F + N_ROUNDS_P[t - 2]));
            assert_eq!(mds_matrix(t).len(), t * t);
        }
    }
}
